//! Manifest types and parsing for seaglass.toml files.

mod file;
mod parse;
mod seed;
mod validate;

use indexmap::IndexMap;
use seaglass_core::DarkMode;
use serde::Deserialize;

pub use file::{CONFIG_FILE, ConfigFile};
pub use parse::parse_manifest;
pub use validate::ParseContext;

/// Root manifest for seaglass.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Source files to scan for class names
    #[serde(default)]
    pub content: ContentConfig,

    /// How `dark:` variants are generated
    #[serde(rename = "darkMode", default)]
    pub dark_mode: DarkMode,

    #[serde(default)]
    pub theme: Theme,

    /// Extension hooks, applied in order
    #[serde(default)]
    pub plugins: Vec<String>,
}

/// The `[content]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Glob patterns, relative to the directory holding seaglass.toml
    #[serde(default)]
    pub files: Vec<String>,

    /// Optional extension allowlist; empty means any extension
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// The `[theme]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    /// Replaces the built-in palette when present
    pub colors: Option<IndexMap<String, ColorValue>>,

    /// Added on top of the built-in scales, keyed by dimension
    #[serde(default)]
    pub extend: IndexMap<String, IndexMap<String, String>>,
}

/// A color family: either one value or a table of shades.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    Shades(IndexMap<String, String>),
}

impl ColorValue {
    /// Iterate `(shade key, value)` pairs; a single value has no key.
    pub fn entries(&self) -> Vec<(Option<&str>, &str)> {
        match self {
            ColorValue::Single(value) => vec![(None, value.as_str())],
            ColorValue::Shades(shades) => shades
                .iter()
                .map(|(key, value)| (Some(key.as_str()), value.as_str()))
                .collect(),
        }
    }
}

impl Manifest {
    /// Whether `theme.colors` replaces the built-in palette.
    pub fn declares_colors(&self) -> bool {
        self.theme.colors.is_some()
    }
}
