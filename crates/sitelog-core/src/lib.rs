//! sitelog-core: extraction, cleanup and log-line assembly for the poller.
//! Pure functions over borrowed input; all I/O lives in the other crates.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;

pub use cleanup::FieldCleanup;
pub use config::{ErrorPolicy, PollerConfig};
pub use error::ExtractError;
pub use extract::{ExtractedRecord, extract_sections};
pub use format::format_log_line;
