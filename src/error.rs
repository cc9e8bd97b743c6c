use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while moving `sensores.json` around.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("file '{}' not found", .0.display())]
    MissingFile(PathBuf),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid controller host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    /// Download refuses to run without a password.
    #[error("no password available")]
    EmptyCredential,

    /// Transport-level failure (connection refused, DNS, timeout...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("controller returned invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

impl TransferError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TransferError::Io {
            path: path.into(),
            source,
        }
    }
}
