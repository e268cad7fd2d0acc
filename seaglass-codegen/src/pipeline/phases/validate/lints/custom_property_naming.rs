//! Lint for custom property naming conventions.

use seaglass_core::{Resolution, Shade};
use seaglass_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when an indirect color does not reference the custom
/// property its token name implies.
///
/// `teal` should use `--color-teal` and `teal.500` should use
/// `--color-teal-500`, so that the stylesheet defining the properties can be
/// written without looking at the config.
pub struct CustomPropertyNamingLint;

impl Lint for CustomPropertyNamingLint {
    fn name(&self) -> &'static str {
        "custom-property-naming"
    }

    fn description(&self) -> &'static str {
        "Check indirect colors reference --color-<name>[-<shade>] properties"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let Some(colors) = &manifest.theme.colors else {
            return;
        };

        for (name, value) in colors {
            for (shade_key, raw) in value.entries() {
                let Some(Resolution::Indirect(variable)) = Resolution::parse(raw) else {
                    continue;
                };

                let expected = expected_property(name, shade_key.and_then(Shade::from_config_key));
                if variable != expected {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "color '{}' references '{}', expected '{}'",
                                token_name(name, shade_key),
                                variable,
                                expected
                            ),
                        )
                        .at(format!("theme.colors.{}", name)),
                    );
                }
            }
        }
    }
}

fn expected_property(name: &str, shade: Option<Shade>) -> String {
    match shade {
        Some(shade) => format!("--color-{}-{}", name, shade),
        None => format!("--color-{}", name),
    }
}

fn token_name(name: &str, shade_key: Option<&str>) -> String {
    match shade_key {
        Some(key) if key != "DEFAULT" => format!("{}-{}", name, key),
        _ => name.to_string(),
    }
}
