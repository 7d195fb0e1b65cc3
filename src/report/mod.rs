//! Report module - textual previews of record sets

mod preview;

pub use preview::{show, PreviewOptions};

pub const RAW_TITLE: &str = "=== RAW DATA ===";
pub const TRANSFORMED_TITLE: &str = "=== TRANSFORMED DATA ===";
