//! Indentation configuration for emitted CSS.

const SPACES: &str = "        ";

/// One level of indentation inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// This many spaces, capped at eight.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 2-space indentation, the usual style for stylesheets.
    pub const CSS: Self = Self::Spaces(2);

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CSS
    }
}
