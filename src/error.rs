use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreedumpError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid root: {0}")]
    InvalidRoot(String),
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}
impl TreedumpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreedumpError::Io {
            path: path.into(),
            source,
        }
    }
}
/// Why a single file could not be dumped. Never aborts a run; rendered inline instead.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}
