use std::path::{Path, PathBuf};

use eyre::Result;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content and was left untouched
    Unchanged,
}

/// A generated stylesheet waiting to be written.
///
/// Identical content is never rewritten, so repeated runs in watch mode do
/// not touch the file's modification time and retrigger downstream watchers.
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn write(&self) -> Result<WriteResult> {
        match std::fs::read_to_string(&self.path) {
            Ok(existing) if existing == self.content => Ok(WriteResult::Unchanged),
            _ => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}
