use std::fmt;

use serde::{Deserialize, Serialize};

/// Strategy for `dark:` variant classes.
///
/// The two strategies are mutually exclusive for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Scope rules under a `.dark` ancestor class.
    #[serde(alias = "selector")]
    Class,
    /// Wrap rules in `@media (prefers-color-scheme: dark)`.
    #[default]
    Media,
}

impl DarkMode {
    /// Ancestor class used by the class strategy.
    pub const ANCESTOR_CLASS: &'static str = "dark";

    /// Media condition used by the media strategy.
    pub const MEDIA_QUERY: &'static str = "(prefers-color-scheme: dark)";
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DarkMode::Class => write!(f, "class"),
            DarkMode::Media => write!(f, "media"),
        }
    }
}
