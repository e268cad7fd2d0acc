//! Lint trait for manifest validation.

use seaglass_manifest::Manifest;

use crate::pipeline::Diagnostic;

/// A lint that checks the manifest for issues.
///
/// Lints only see a manifest that already parsed and passed structural
/// validation; they report conventions, not hard errors.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}
