// src/error.rs

use std::path::PathBuf;

/// Errors raised while loading a telemetry log.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The log could not be opened.
    #[error("cannot open log file '{}': {source}", .path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failure after the file was opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not hold five numeric tokens.
    #[error("malformed record at line {line}: {reason} (line: '{content}')")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    /// The log held no records.
    #[error("log file '{}' contains no records", .path.display())]
    EmptyInput { path: PathBuf },

    /// Columns handed to the table constructor differ in length.
    #[error("column length mismatch: {0}")]
    ColumnLengthMismatch(String),
}

pub type Result<T> = std::result::Result<T, TelemetryError>;
