//! Engine session handle.
//!
//! A `Session` is passed explicitly to whatever needs the engine and is
//! released exactly once: by `stop`, or by `Drop` on any other exit path.

use polars::prelude::DataFrame;
use std::cell::Cell;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::data::{CsvOptions, DataLoader, LoaderError};

#[cfg(test)]
thread_local! {
    /// Releases performed on this thread.
    static RELEASES: Cell<usize> = const { Cell::new(0) };
}

/// What a session did over its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub app_name: String,
    pub frames_loaded: usize,
    pub uptime: Duration,
}

pub struct Session {
    app_name: String,
    started: Instant,
    frames_loaded: Cell<usize>,
    released: bool,
}

impl Session {
    /// Start a session for `app_name`.
    pub fn get(app_name: &str) -> Self {
        info!(app = app_name, "session started");
        Self {
            app_name: app_name.to_string(),
            started: Instant::now(),
            frames_loaded: Cell::new(0),
            released: false,
        }
    }

    /// Run `f` with a fresh session and stop it afterwards, whatever `f` returns.
    pub fn scoped<T, E>(app_name: &str, f: impl FnOnce(&Session) -> Result<T, E>) -> Result<T, E> {
        let session = Self::get(app_name);
        let result = f(&session);
        session.stop();
        result
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Read a CSV file into a DataFrame.
    pub fn read_csv(&self, path: &Path, options: &CsvOptions) -> Result<DataFrame, LoaderError> {
        let df = DataLoader::new(*options).load_csv(path)?;
        self.frames_loaded.set(self.frames_loaded.get() + 1);
        Ok(df)
    }

    pub fn stop(mut self) -> SessionSummary {
        self.release();
        self.summary()
    }

    fn summary(&self) -> SessionSummary {
        SessionSummary {
            app_name: self.app_name.clone(),
            frames_loaded: self.frames_loaded.get(),
            uptime: self.started.elapsed(),
        }
    }

    /// Returns false if the session was already released.
    fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        #[cfg(test)]
        RELEASES.with(|n| n.set(n.get() + 1));

        let summary = self.summary();
        info!(
            app = %summary.app_name,
            frames_loaded = summary.frames_loaded,
            uptime = ?summary.uptime,
            "session stopped"
        );
        true
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if !self.released {
            warn!(app = %self.app_name, "session dropped without stop");
            self.release();
        }
    }
}
