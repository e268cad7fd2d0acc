//! Content scanning for the seaglass stylesheet generator.
//!
//! The scanner expands glob patterns, reads the matching files in parallel
//! and collects every string that could be a class name. It over-approximates
//! on purpose: deciding which candidates are real utilities is left to the
//! generator.

mod control;
mod error;
mod extract;
mod pattern;
mod scanner;

pub use control::{AbortReason, ScanControl};
pub use error::{FileDecodeError, FileReadError, ScanError, SkippedFile};
pub use extract::extract_candidates;
pub use pattern::ScanPattern;
pub use scanner::{ContentScanner, ScanOutcome};
