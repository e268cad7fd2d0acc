//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use seaglass_core::{Dimension, Resolution, Shade, ShadowSpec};

use super::{CONFIG_FILE, ColorValue, Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, CONFIG_FILE)
    }
}

impl Manifest {
    /// Parse a seaglass.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a seaglass.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    validate_content(manifest, &ctx.push("content"))?;

    for plugin in &manifest.plugins {
        if plugin.trim().is_empty() {
            return Err(ctx.error("plugin names cannot be empty", ctx.find_key_span("plugins")));
        }
    }

    let theme = ctx.push("theme");
    if let Some(colors) = &manifest.theme.colors {
        let colors_ctx = theme.push("colors");
        for (name, value) in colors {
            colors_ctx.validate_color_name(name)?;
            validate_color(name, value, &colors_ctx.push(name))?;
        }
    }

    let extend = theme.push("extend");
    for (dimension, entries) in &manifest.theme.extend {
        let Ok(dimension_kind) = Dimension::from_str(dimension) else {
            return Err(ctx
                .source_context()
                .unknown_dimension_error(dimension, extend.find_key_span(dimension)));
        };

        let dimension_ctx = extend.push(dimension);
        for (key, value) in entries {
            validate_scale_entry(dimension_kind, key, value, &dimension_ctx)?;
        }
    }

    Ok(())
}

fn validate_content(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    for pattern in &manifest.content.files {
        if pattern.trim().is_empty() {
            return Err(ctx.error("content patterns cannot be empty", ctx.find_key_span("files")));
        }
        if let Err(e) = glob::Pattern::new(pattern) {
            return Err(ctx.error(
                format!("invalid content pattern '{}': {}", pattern, e.msg),
                ctx.find_value_span(pattern),
            ));
        }
    }

    for extension in &manifest.content.extensions {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\', '*']) {
            return Err(ctx.error(
                format!("invalid file extension '{}'", extension),
                ctx.find_key_span("extensions"),
            ));
        }
    }

    Ok(())
}

fn validate_color(name: &str, value: &ColorValue, ctx: &ParseContext<'_>) -> Result<()> {
    for (shade_key, raw) in value.entries() {
        let token = match shade_key {
            Some(key) => {
                ctx.validate_shade_key(name, key)?;
                match Shade::from_config_key(key) {
                    Some(shade) => format!("{}-{}", name, shade),
                    None => name.to_string(),
                }
            }
            None => name.to_string(),
        };

        if raw.trim().is_empty() {
            return Err(ctx.error(
                format!("color '{}' has an empty value", token),
                shade_key.and_then(|key| ctx.find_key_span(key)),
            ));
        }

        if Resolution::parse(raw).is_none() {
            return Err(ctx.source_context().malformed_variable_error(
                token,
                raw,
                ctx.find_value_span(raw),
            ));
        }
    }
    Ok(())
}

fn validate_scale_entry(
    dimension: Dimension,
    key: &str,
    value: &str,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(ctx.error(
            format!("invalid {} key '{}'", dimension, key),
            ctx.find_key_span(key),
        ));
    }

    if value.trim().is_empty() {
        return Err(ctx.error(
            format!("{} '{}' has an empty value", dimension, key),
            ctx.find_key_span(key),
        ));
    }

    if dimension == Dimension::BoxShadow {
        if let Err(e) = ShadowSpec::parse(value) {
            return Err(ctx
                .source_context()
                .invalid_shadow_error(key, e, ctx.find_value_span(value)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use seaglass_core::DarkMode;

    use super::*;

    #[test]
    fn test_parse_full_document() {
        let manifest: Manifest = r##"
            darkMode = "class"
            plugins = []

            [content]
            files = ["*.html", "./src/**/*.rs"]

            [theme.colors]
            transparent = "transparent"
            current = "currentColor"
            white = "#ffffff"

            [theme.colors.teal]
            DEFAULT = "var(--color-teal)"
            900 = "var(--color-teal-900)"
            500 = "var(--color-teal-500)"

            [theme.colors.aquamarine]
            DEFAULT = "var(--color-aquamarine)"
            light = "var(--color-aquamarine-light)"

            [theme.extend.height]
            108 = "26rem"

            [theme.extend.boxShadow]
            mint-glow = "0 4px 6px -1px rgba(167, 243, 208, 0.12), 0 2px 4px -2px rgba(167, 243, 208, 0.1)"
        "##
        .parse()
        .unwrap();

        assert_eq!(manifest.dark_mode, DarkMode::Class);
        assert_eq!(manifest.content.files, vec!["*.html", "./src/**/*.rs"]);
        let colors = manifest.theme.colors.as_ref().unwrap();
        assert_eq!(
            colors.keys().collect::<Vec<_>>(),
            vec!["transparent", "current", "white", "teal", "aquamarine"]
        );
        assert_eq!(
            colors["teal"].entries(),
            vec![
                (Some("DEFAULT"), "var(--color-teal)"),
                (Some("900"), "var(--color-teal-900)"),
                (Some("500"), "var(--color-teal-500)"),
            ]
        );
        assert_eq!(manifest.theme.extend["height"]["108"], "26rem");
    }

    #[test]
    fn test_defaults() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest.dark_mode, DarkMode::Media);
        assert!(manifest.content.files.is_empty());
        assert!(!manifest.declares_colors());
        assert!(manifest.plugins.is_empty());
    }

    #[test]
    fn test_selector_alias() {
        let manifest: Manifest = r#"darkMode = "selector""#.parse().unwrap();
        assert_eq!(manifest.dark_mode, DarkMode::Class);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Manifest::from_str(r#"darkMode = "sometimes""#).unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_top_level_key() {
        let err = Manifest::from_str("[themes]\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_malformed_variable() {
        let src = r#"
            [theme.colors.teal]
            500 = "var(color-teal-500)"
        "#;
        let err = Manifest::from_str(src).unwrap_err();
        match *err {
            Error::MalformedVariable { token, span, .. } => {
                assert_eq!(token, "teal-500");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "var(color-teal-500)");
            }
            other => panic!("expected malformed variable, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_color_name() {
        let err = Manifest::from_str(
            r##"
            [theme.colors]
            "-teal" = "#14b8a6"
        "##,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidColorName { .. }));
    }

    #[test]
    fn test_unknown_dimension() {
        let src = r#"
            [theme.extend.spacing]
            108 = "26rem"
        "#;
        let err = Manifest::from_str(src).unwrap_err();
        match *err {
            Error::UnknownDimension { dimension, span, .. } => {
                assert_eq!(dimension, "spacing");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "spacing");
            }
            other => panic!("expected unknown dimension, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_shadow() {
        let err = Manifest::from_str(
            r#"
            [theme.extend.boxShadow]
            flat = "0 4px"
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidShadow { .. }));
    }

    #[test]
    fn test_invalid_content_pattern() {
        let err = Manifest::from_str(
            r#"
            [content]
            files = ["src/[*.rs"]
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
        assert!(err.to_string().contains("invalid content pattern"));
    }
}
