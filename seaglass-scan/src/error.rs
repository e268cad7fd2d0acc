use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::control::AbortReason;

/// Fatal scan failures. A scan that returns one of these produces no
/// candidates at all.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid content pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("scan aborted: {0}")]
    Aborted(AbortReason),
}

/// A file that matched a pattern but is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} is not valid UTF-8 (invalid byte at offset {valid_up_to})", path.display())]
pub struct FileDecodeError {
    pub path: PathBuf,
    pub valid_up_to: usize,
}

/// A file that matched a pattern but could not be read, e.g. because it
/// was deleted after enumeration or is not readable by this user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot read {}: {message}", path.display())]
pub struct FileReadError {
    pub path: PathBuf,
    pub kind: io::ErrorKind,
    pub message: String,
}

impl FileReadError {
    pub(crate) fn new(path: &Path, source: &io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: source.kind(),
            message: source.to_string(),
        }
    }
}

/// A matched file left out of the scan. The other files are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkippedFile {
    #[error(transparent)]
    Undecodable(#[from] FileDecodeError),

    #[error(transparent)]
    Unreadable(#[from] FileReadError),
}

impl SkippedFile {
    pub fn path(&self) -> &Path {
        match self {
            SkippedFile::Undecodable(e) => &e.path,
            SkippedFile::Unreadable(e) => &e.path,
        }
    }
}
