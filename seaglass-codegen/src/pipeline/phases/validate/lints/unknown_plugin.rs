//! Lint for configured plugins.

use seaglass_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about `plugins` entries.
///
/// No plugins ship with seaglass, so every listed plugin is ignored.
pub struct UnknownPluginLint;

impl Lint for UnknownPluginLint {
    fn name(&self) -> &'static str {
        "unknown-plugin"
    }

    fn description(&self) -> &'static str {
        "Report plugins that are not available and will be ignored"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for plugin in &manifest.plugins {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("plugin '{}' is not available and will be ignored", plugin),
                )
                .at("plugins"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_plugins() {
        let manifest: Manifest = "plugins = []".parse().unwrap();
        let mut diagnostics = Vec::new();
        UnknownPluginLint.check(&manifest, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_each_plugin_is_reported() {
        let manifest: Manifest = r#"plugins = ["forms", "typography"]"#.parse().unwrap();
        let mut diagnostics = Vec::new();
        UnknownPluginLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("'forms'"));
        assert!(diagnostics[1].message.contains("'typography'"));
    }
}
