//! Tokens operation - registered colors and scale extensions.

use eyre::{Context, Result};
use seaglass_codegen::pipeline::TokenSnapshot;
use seaglass_manifest::Manifest;

use crate::reports::{ScaleEntry, TokensReport};

/// Execute the tokens operation.
pub fn tokens(manifest: &Manifest) -> Result<TokensReport> {
    let registry = manifest
        .token_registry()
        .wrap_err("failed to build the token registry")?;
    let scales = manifest
        .scale_definitions()
        .wrap_err("failed to build scale definitions")?;

    let extensions = scales
        .extensions()
        .map(|(dimension, key, value)| ScaleEntry {
            dimension: dimension.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect();

    Ok(TokensReport {
        declared: manifest.declares_colors(),
        colors: TokenSnapshot::collect(&registry),
        extensions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_json() {
        let manifest: Manifest = r##"
            [theme.colors]
            white = "#ffffff"

            [theme.colors.teal]
            500 = "var(--color-teal-500)"

            [theme.extend.height]
            108 = "26rem"
        "##
        .parse()
        .unwrap();

        let report = tokens(&manifest).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "declared": true,
                "colors": [
                    {"token": "white", "resolution": {"kind": "literal", "value": "#ffffff"}},
                    {"token": "teal-500", "resolution": {"kind": "indirect", "value": "--color-teal-500"}},
                ],
                "extensions": [
                    {"dimension": "height", "key": "108", "value": "26rem"},
                ],
            })
        );
    }
}
