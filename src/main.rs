//! Sales ETL - CSV cleaning job
//!
//! Loads the raw sales CSV, drops incomplete rows, derives `total_amount`
//! and prints before/after previews.

mod config;
mod data;
mod pipeline;
mod report;
mod session;

use anyhow::Result;
use config::{EtlConfig, CONFIG_FILE};
use session::Session;
use std::io;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the previews.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let config = EtlConfig::load_or_default(Path::new(CONFIG_FILE))?;

    Session::scoped(&config.app_name, |session| {
        let mut stdout = io::stdout().lock();
        pipeline::run(session, &config, &mut stdout).map(|_| ())
    })
}
