use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use glob::MatchOptions;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    FileDecodeError, FileReadError, ScanControl, ScanError, ScanPattern, SkippedFile,
    extract_candidates,
};

/// Everything a completed scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Deduplicated candidate class names across all files
    pub candidates: BTreeSet<String>,
    /// Files that were read and lexed, in path order
    pub files: Vec<PathBuf>,
    /// Files that could not be read or are not valid UTF-8
    pub skipped: Vec<SkippedFile>,
}

/// Result of reading a single file.
enum FileScan {
    Lexed(PathBuf, BTreeSet<String>),
    Skipped(SkippedFile),
}

/// Expands scan patterns and lexes every matching file.
#[derive(Debug, Clone)]
pub struct ContentScanner {
    base_dir: PathBuf,
    control: ScanControl,
}

impl ContentScanner {
    /// Create a scanner resolving relative patterns against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            control: ScanControl::default(),
        }
    }

    pub fn with_control(mut self, control: ScanControl) -> Self {
        self.control = control;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Scan all files matched by `patterns`.
    ///
    /// Files are read in parallel and merged afterwards, so the outcome does
    /// not depend on discovery order. A file that cannot be read or decoded
    /// is recorded in [`ScanOutcome::skipped`] and the rest are still
    /// scanned. The control is checked before reading, while reading and
    /// once more after merging: an aborted scan never returns partial
    /// candidates.
    pub fn scan(&self, patterns: &[ScanPattern]) -> Result<ScanOutcome, ScanError> {
        self.control.check()?;

        let files = self.enumerate(patterns)?;
        debug!(count = files.len(), "matched content files");

        let results: Vec<Result<FileScan, ScanError>> = files
            .par_iter()
            .map(|path| {
                self.control.check()?;
                Ok(scan_file(path))
            })
            .collect();

        let mut outcome = ScanOutcome::default();
        for result in results {
            match result? {
                FileScan::Lexed(path, candidates) => {
                    outcome.candidates.extend(candidates);
                    outcome.files.push(path);
                }
                FileScan::Skipped(error) => {
                    warn!("{error}; skipping");
                    outcome.skipped.push(error);
                }
            }
        }

        self.control.check()?;
        Ok(outcome)
    }

    /// Expand patterns into a sorted, deduplicated list of files.
    fn enumerate(&self, patterns: &[ScanPattern]) -> Result<Vec<PathBuf>, ScanError> {
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };

        let mut files = BTreeSet::new();
        for pattern in patterns {
            let resolved = pattern.resolve_against(&self.base_dir);
            let entries = glob::glob_with(&resolved, options).map_err(|e| ScanError::Pattern {
                pattern: pattern.pattern.clone(),
                message: e.msg.to_string(),
            })?;

            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() && pattern.allows(&path) => {
                        files.insert(path);
                    }
                    Ok(_) => {}
                    Err(e) => warn!("cannot read {}: {}", e.path().display(), e.error()),
                }
            }
        }

        Ok(files.into_iter().collect())
    }
}

fn scan_file(path: &Path) -> FileScan {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return FileScan::Skipped(FileReadError::new(path, &e).into()),
    };

    match String::from_utf8(bytes) {
        Ok(text) => {
            let candidates = extract_candidates(&text);
            debug!(path = %path.display(), candidates = candidates.len(), "scanned file");
            FileScan::Lexed(path.to_path_buf(), candidates)
        }
        Err(e) => FileScan::Skipped(
            FileDecodeError {
                path: path.to_path_buf(),
                valid_up_to: e.utf8_error().valid_up_to(),
            }
            .into(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_removed_after_enumeration_is_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gone.html");

        match scan_file(&path) {
            FileScan::Skipped(SkippedFile::Unreadable(e)) => {
                assert_eq!(e.kind, io::ErrorKind::NotFound);
                assert_eq!(e.path, path);
            }
            _ => panic!("expected an unreadable file"),
        }
    }

    #[test]
    fn test_lexed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.html");
        fs::write(&path, "bg-teal-500").unwrap();

        match scan_file(&path) {
            FileScan::Lexed(lexed, candidates) => {
                assert_eq!(lexed, path);
                assert!(candidates.contains("bg-teal-500"));
            }
            FileScan::Skipped(e) => panic!("unexpected skip: {e}"),
        }
    }
}
