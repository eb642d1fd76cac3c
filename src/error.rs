use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading documents or writing a report
#[derive(Debug, Error)]
pub enum KeysError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write report")]
    Report(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeysError>;
