//! Lint for missing content patterns.

use seaglass_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when no content files are configured.
pub struct EmptyContentLint;

impl Lint for EmptyContentLint {
    fn name(&self) -> &'static str {
        "empty-content"
    }

    fn description(&self) -> &'static str {
        "Check that content patterns are configured"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        if manifest.content.files.is_empty() {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    "no content files configured, the generated stylesheet will be empty",
                )
                .at("content.files"),
            );
        }
    }
}
