//! CSS builder for writing properly indented or minified rules.

use super::Indent;

/// How emitted CSS is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// One declaration per line, rules separated by blank lines.
    #[default]
    Pretty,
    /// No optional whitespace at all.
    Minified,
}

/// Fluent API for building CSS with proper indentation.
///
/// The same calls produce either layout, so callers never branch on
/// [`OutputStyle`] themselves.
///
/// # Example
///
/// ```
/// use seaglass_codegen::builder::CssBuilder;
///
/// let mut builder = CssBuilder::pretty();
/// builder
///     .open_block(".bg-white")
///     .push_declaration("background-color", "#ffffff")
///     .close_block();
///
/// assert_eq!(builder.build(), ".bg-white {\n  background-color: #ffffff;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CssBuilder {
    indent_level: usize,
    indent: Indent,
    style: OutputStyle,
    buffer: String,
}

impl CssBuilder {
    /// Create a new CssBuilder with the specified indentation and layout.
    pub fn new(indent: Indent, style: OutputStyle) -> Self {
        Self {
            indent_level: 0,
            indent,
            style,
            buffer: String::new(),
        }
    }

    /// Create a builder with 2-space indentation.
    pub fn pretty() -> Self {
        Self::new(Indent::CSS, OutputStyle::Pretty)
    }

    /// Create a builder that emits no optional whitespace.
    pub fn minified() -> Self {
        Self::new(Indent::CSS, OutputStyle::Minified)
    }

    /// Create a builder for the given layout.
    pub fn for_style(style: OutputStyle) -> Self {
        Self::new(Indent::CSS, style)
    }

    fn is_minified(&self) -> bool {
        self.style == OutputStyle::Minified
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if self.is_minified() {
            self.buffer.push_str(s);
            return self;
        }
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line. Ignored when minifying.
    pub fn push_blank(&mut self) -> &mut Self {
        if !self.is_minified() {
            self.buffer.push('\n');
        }
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Open a block such as a rule or an `@media` query.
    pub fn open_block(&mut self, header: &str) -> &mut Self {
        if self.is_minified() {
            self.buffer.push_str(header);
            self.buffer.push('{');
        } else {
            self.push_line(&format!("{} {{", header));
        }
        self.push_indent()
    }

    /// Close the innermost block.
    pub fn close_block(&mut self) -> &mut Self {
        self.push_dedent();
        self.push_line("}")
    }

    /// Add a `property: value;` declaration.
    pub fn push_declaration(&mut self, property: &str, value: &str) -> &mut Self {
        if self.is_minified() {
            self.buffer.push_str(property);
            self.buffer.push(':');
            self.buffer.push_str(value);
            self.buffer.push(';');
            return self;
        }
        self.push_line(&format!("{}: {};", property, value))
    }

    /// Build the final string.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents (for inspection).
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CssBuilder {
    fn default() -> Self {
        Self::pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut builder = CssBuilder::pretty();
        builder
            .open_block("@media (prefers-color-scheme: dark)")
            .open_block(".dark\\:bg-teal-500")
            .push_declaration("background-color", "var(--color-teal-500)")
            .close_block()
            .close_block();

        assert_eq!(
            builder.build(),
            "@media (prefers-color-scheme: dark) {\n  .dark\\:bg-teal-500 {\n    background-color: var(--color-teal-500);\n  }\n}\n"
        );
    }

    #[test]
    fn test_minified() {
        let mut builder = CssBuilder::minified();
        builder
            .open_block(".h-108")
            .push_declaration("height", "26rem")
            .close_block()
            .push_blank()
            .open_block(".w-full")
            .push_declaration("width", "100%")
            .close_block();

        assert_eq!(builder.build(), ".h-108{height:26rem;}.w-full{width:100%;}");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CssBuilder::new(Indent::Tab, OutputStyle::Pretty);
        builder.push_dedent().push_line("a");
        assert_eq!(builder.as_str(), "a\n");
        assert!(!builder.is_empty());
    }
}
