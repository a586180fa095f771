//! Error Types Module
//!
//! Structured error type for the whole crate, built on `thiserror` for
//! automatic conversions and message formatting.

use thiserror::Error;

/// Error type used across the menugrid crate.
///
/// Covers the fatal failure modes of an extraction run: unreadable files,
/// workbook parse failures, serialization failures, and invalid
/// configuration. Absent anchor dates and filtered item rows are *not*
/// errors; the grid is sparse by design and those slots are skipped
/// silently.
///
/// # Example
///
/// ```rust,no_run
/// use menugrid::MenuGridError;
/// use std::fs::File;
///
/// fn open_workbook(path: &str) -> Result<(), MenuGridError> {
///     let _file = File::open(path)?; // io::Error converts automatically
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum MenuGridError {
    /// I/O failure while reading the workbook or writing the feed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// calamine failed to parse the workbook.
    #[error("Failed to parse workbook: {0}")]
    Parse(#[from] calamine::Error),

    /// The registry could not be serialized to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration, detected at `ExtractorBuilder::build()` or
    /// when a configured sheet name does not exist in the workbook.
    #[error("Configuration error: {0}")]
    Config(String),
}
