use crate::error::ReadError;
use std::path::PathBuf;

/// One file visited by the walk.
#[derive(Debug)]
pub struct DumpEntry {
    /// Path relative to the configured root.
    pub path: PathBuf,
    /// The file's text, or why it could not be read.
    ///
    /// A failed read still produces a block in the dump, with the error message
    /// in place of the content.
    pub content: Result<String, ReadError>,
}

impl DumpEntry {
    pub fn is_error(&self) -> bool {
        self.content.is_err()
    }
}
