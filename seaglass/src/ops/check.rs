//! Check operation - manifest validation.

use std::path::Path;

use seaglass_codegen::pipeline::{GenerationContext, Pipeline, Severity};
use seaglass_manifest::ConfigFile;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the validate and resolve phases only; content files are not read.
pub fn check(config: &ConfigFile, config_path: &Path) -> CheckReport {
    let manifest = config.manifest();
    let mut ctx = GenerationContext::new(manifest.clone(), config.base_dir());
    let result = Pipeline::check().run_in(&mut ctx);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    if let Err(err) = result {
        errors.push(format!("{:#}", err));
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        token_count: ctx.registry.as_ref().map_or(0, |r| r.len()),
        declares_colors: manifest.declares_colors(),
        extension_count: manifest.theme.extend.values().map(|e| e.len()).sum(),
        dark_mode: manifest.dark_mode,
    }
}
