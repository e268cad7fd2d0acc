//! Generation context passed through pipeline phases.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use seaglass_core::{ScaleDefinitions, TokenRegistry};
use seaglass_manifest::Manifest;
use seaglass_scan::ScanControl;

use super::diagnostic::{Diagnostic, Severity};
use crate::{builder::OutputStyle, generator::Stylesheet};

/// A user stylesheet that generated rules are spliced into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStylesheet {
    pub path: PathBuf,
    pub content: String,
}

impl InputStylesheet {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read input stylesheet {}", path.display()))?;
        Ok(Self::new(path, content))
    }
}

/// Context passed through all pipeline phases.
///
/// The inputs are set up front; each phase fills in its own results in
/// order, so a later phase can rely on every earlier field being present.
#[derive(Debug)]
pub struct GenerationContext {
    /// The manifest being built.
    pub manifest: Manifest,
    /// Directory that content patterns are relative to.
    pub base_dir: PathBuf,
    pub input: Option<InputStylesheet>,
    pub style: OutputStyle,
    /// Deadline and interrupt for the scan phase.
    pub control: ScanControl,
    /// Candidate class names (populated by ScanPhase).
    pub candidates: Option<BTreeSet<String>>,
    /// Files the scan read successfully (populated by ScanPhase).
    pub scanned_files: Vec<PathBuf>,
    /// Populated by ResolvePhase.
    pub registry: Option<TokenRegistry>,
    /// Populated by ResolvePhase.
    pub scales: Option<ScaleDefinitions>,
    /// Candidates that name a known utility (populated by FilterPhase).
    pub used: Option<BTreeSet<String>>,
    /// Populated by EmitPhase.
    pub stylesheet: Option<Stylesheet>,
    /// Final CSS text, spliced into the input stylesheet if there is one
    /// (populated by EmitPhase).
    pub output: Option<String>,
    /// Diagnostics collected during the build.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(manifest: Manifest, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest,
            base_dir: base_dir.into(),
            input: None,
            style: OutputStyle::default(),
            control: ScanControl::default(),
            candidates: None,
            scanned_files: Vec::new(),
            registry: None,
            scales: None,
            used: None,
            stylesheet: None,
            output: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: InputStylesheet) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_control(mut self, control: ScanControl) -> Self {
        self.control = control;
        self
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> GenerationContext {
        GenerationContext::new(Manifest::default(), ".")
    }

    #[test]
    fn test_context_creation() {
        let ctx = make_context();

        assert!(ctx.candidates.is_none());
        assert!(ctx.registry.is_none());
        assert!(ctx.output.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.style, OutputStyle::Pretty);
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = make_context();

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");
        ctx.add_info("test", "just info");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_read_missing_input() {
        let err = InputStylesheet::read("does/not/exist.css").unwrap_err();
        assert!(err.to_string().contains("failed to read input stylesheet"));
    }
}
