//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Error, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy. The path is used to narrow span lookups:
/// the shade key `500` is searched for only after the `teal` table that
/// contains it, not at its first occurrence in the file.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "seaglass.toml");
/// let teal = ctx.push("theme").push("colors").push("teal");
/// teal.validate_shade_key("teal", "500")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["theme", "colors", "teal"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Create a validation error.
    pub fn error(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        self.source.validation_error(message, span)
    }

    /// Byte offset just past the last path segment that can be located.
    fn anchor(&self) -> usize {
        let src = self.source.src();
        let mut offset = 0;
        for segment in &self.path {
            if let Some(span) = find_key_span(&src[offset..], segment) {
                offset += span.offset() + span.len();
            }
        }
        offset
    }

    /// Find the span of a key at or below the current path.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        let offset = self.anchor();
        find_key_span(&self.source.src()[offset..], key)
            .map(|span| SourceSpan::from((offset + span.offset(), span.len())))
    }

    /// Find the span of a quoted string value at or below the current path.
    pub fn find_value_span(&self, value: &str) -> Option<SourceSpan> {
        let offset = self.anchor();
        find_value_span(&self.source.src()[offset..], value)
            .map(|span| SourceSpan::from((offset + span.offset(), span.len())))
    }

    /// Validate a color family name.
    pub fn validate_color_name(&self, name: &str) -> Result<()> {
        match validate_token_segment(name) {
            Some(reason) => Err(self.source.invalid_color_name_error(
                name,
                reason,
                self.find_key_span(name),
            )),
            None => Ok(()),
        }
    }

    /// Validate a shade key inside a color family.
    pub fn validate_shade_key(&self, color: &str, key: &str) -> Result<()> {
        if key == "DEFAULT" {
            return Ok(());
        }
        match validate_token_segment(key) {
            Some(reason) => Err(self.error(
                format!("invalid shade '{}' for color '{}': {}", key, color, reason),
                self.find_key_span(key),
            )),
            None => Ok(()),
        }
    }
}

/// Check that a name can appear as a dash-separated segment of a class name.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_token_segment(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Some("name cannot start or end with a dash");
    }
    if name.contains("--") {
        return Some("name cannot contain consecutive dashes");
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Some("name contains characters that are not allowed in class names");
    }
    None
}

fn is_key_boundary_before(c: Option<char>) -> bool {
    matches!(
        c,
        None | Some('\n' | ' ' | '\t' | '.' | '[' | '{' | ',' | '"' | '\'')
    )
}

fn is_key_boundary_after(c: Option<char>) -> bool {
    matches!(c, Some(' ' | '\t' | '=' | ']' | '.'))
}

/// Find the span of a key in TOML source.
///
/// Matches bare keys (`key = `), quoted keys (`"key" = `), and table header
/// segments (`[theme.colors.key]`), skipping occurrences inside values such
/// as the `500` in `var(--color-teal-500)`.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    if key.is_empty() {
        return None;
    }

    for (pos, _) in src.match_indices(key) {
        let before = src[..pos].chars().next_back();
        let mut after = src[pos + key.len()..].chars();
        let mut next = after.next();

        // Quoted keys: the closing quote must mirror the opening one
        if let Some(quote @ ('"' | '\'')) = before {
            if next != Some(quote) {
                continue;
            }
            next = after.next();
        }

        if is_key_boundary_before(before) && is_key_boundary_after(next) {
            return Some(SourceSpan::from((pos, key.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Find the span of a string value (without its quotes).
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice<'s>(src: &'s str, span: SourceSpan) -> &'s str {
        &src[span.offset()..span.offset() + span.len()]
    }

    #[test]
    fn test_valid_segments() {
        assert!(validate_token_segment("teal").is_none());
        assert!(validate_token_segment("gray-blue").is_none());
        assert!(validate_token_segment("500").is_none());
        assert!(validate_token_segment("deep_sea").is_none());
    }

    #[test]
    fn test_invalid_segments() {
        assert!(validate_token_segment("").is_some());
        assert!(validate_token_segment("-teal").is_some());
        assert!(validate_token_segment("teal-").is_some());
        assert!(validate_token_segment("te--al").is_some());
        assert!(validate_token_segment("teal green").is_some());
        assert!(validate_token_segment("teal.500").is_some());
    }

    #[test]
    fn test_find_key_span_table_header() {
        let src = "[theme.colors.teal]\n500 = \"x\"";
        let span = find_key_span(src, "teal").unwrap();
        assert_eq!(span.offset(), 14);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_find_key_span_skips_values() {
        let src = "a = \"var(--color-teal-500)\"\n500 = \"b\"";
        let span = find_key_span(src, "500").unwrap();
        assert_eq!(span.offset(), 28);
    }

    #[test]
    fn test_find_key_span_quoted() {
        let src = "[theme.extend.boxShadow]\n\"seafoam-light\" = \"none\"";
        let span = find_key_span(src, "seafoam-light").unwrap();
        assert_eq!(slice(src, span), "seafoam-light");
    }

    #[test]
    fn test_find_key_span_missing() {
        assert!(find_key_span("teal = 1", "mint").is_none());
        assert!(find_key_span("teal = 1", "").is_none());
    }

    #[test]
    fn test_context_narrows_search() {
        let src = r#"
[theme.colors.gray]
500 = "var(--color-gray-500)"

[theme.colors.teal]
500 = "var(--color-teal-500)"
"#;
        let ctx = ParseContext::new(src, "seaglass.toml");
        let teal = ctx.push("theme").push("colors").push("teal");

        let span = teal.find_key_span("500").unwrap();
        assert!(span.offset() > src.find("[theme.colors.teal]").unwrap());

        let value = teal.find_value_span("var(--color-teal-500)").unwrap();
        assert_eq!(slice(src, value), "var(--color-teal-500)");
    }

    #[test]
    fn test_parse_context_path() {
        let ctx = ParseContext::new("", "seaglass.toml");
        assert_eq!(ctx.src(), "");
        assert_eq!(ctx.filename(), "seaglass.toml");
        let nested = ctx.push("theme").push("extend").push("height");
        assert_eq!(nested.path_string(), "theme.extend.height");
    }

    #[test]
    fn test_validate_shade_key() {
        let ctx = ParseContext::new("", "seaglass.toml");
        assert!(ctx.validate_shade_key("teal", "DEFAULT").is_ok());
        assert!(ctx.validate_shade_key("teal", "light").is_ok());
        let err = ctx.validate_shade_key("teal", "lig ht").unwrap_err();
        assert!(err.to_string().contains("invalid shade"));
    }
}
