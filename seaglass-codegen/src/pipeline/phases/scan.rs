//! Scan phase - collects candidate class names from content files.

use eyre::{Result, WrapErr};
use seaglass_scan::{ContentScanner, ScanPattern};
use tracing::debug;

use crate::pipeline::{Diagnostic, GenerationContext, Phase};

/// Phase that expands the manifest's content patterns and lexes every file.
///
/// A scan aborted by deadline or interrupt fails the phase, so nothing from
/// a partial scan reaches the later phases.
pub struct ScanPhase;

impl Phase for ScanPhase {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn description(&self) -> &'static str {
        "Collect candidate class names from content files"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let content = &ctx.manifest.content;
        let patterns: Vec<ScanPattern> = content
            .files
            .iter()
            .map(|pattern| ScanPattern::new(pattern).with_extensions(content.extensions.iter().cloned()))
            .collect();

        let scanner = ContentScanner::new(&ctx.base_dir).with_control(ctx.control.clone());
        let outcome = scanner
            .scan(&patterns)
            .wrap_err("failed to scan content files")?;

        for skipped in &outcome.skipped {
            ctx.add_diagnostic(
                Diagnostic::warning("scan", skipped.to_string())
                    .at(skipped.path().display().to_string()),
            );
        }

        debug!(
            files = outcome.files.len(),
            candidates = outcome.candidates.len(),
            "scan complete"
        );
        ctx.scanned_files = outcome.files;
        ctx.candidates = Some(outcome.candidates);
        Ok(())
    }
}
