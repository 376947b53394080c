use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the failure cases of the conversion and checklist
/// utilities.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the spreadsheet reader.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::Error),

    /// Errors raised while emitting CSV records.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when the checklist report cannot be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a workbook has no usable worksheet.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the derived output path would overwrite the source file.
    #[error("refusing to overwrite source file {0}")]
    DestinationIsSource(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
