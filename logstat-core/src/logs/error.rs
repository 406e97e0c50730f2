use std::num::ParseIntError;
use thiserror::Error;

/// Per-line failure. Recoverable: the line is dropped and ingestion continues.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input did not match parse format: '{line}'")]
    FormatMismatch { line: String },

    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid status code '{value}': {source}")]
    Status {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid response size '{value}': {source}")]
    Size {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    pub fn format_mismatch(line: impl Into<String>) -> Self {
        Self::FormatMismatch { line: line.into() }
    }

    /// Whether the line matched the grammar but one of its fields did not parse.
    pub fn is_field_error(&self) -> bool {
        !matches!(self, Self::FormatMismatch { .. })
    }
}

/// Stream-level failure. Fatal for the ingestion task.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read log stream after {lines_read} lines: {source}")]
    Read {
        lines_read: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("ingestion thread exited without reporting an outcome")]
    Disconnected,
}
