use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Empty {name} argument")]
    EmptyArgument { name: &'static str },

    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Failed to open {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Scan(#[from] ScanError),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(std::io::Error),
}

/// Fatal error raised while scanning a cookie log
#[derive(Debug, Error)]
pub(crate) enum ScanError {
    #[error("Failed to read line {line_no}: {source}")]
    ReadFailure {
        line_no: usize,
        source: std::io::Error,
    },
}

/// Reason a single log line was skipped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum RecordError {
    #[error("malformed record `{line}` (expected <cookie>,<timestamp>)")]
    MalformedRecord { line: String },

    #[error("invalid timestamp `{input}`: {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("line is not valid UTF-8 `{line}`")]
    InvalidEncoding { line: String },
}
