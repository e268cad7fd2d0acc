use std::{borrow::Cow, fmt};

use serde::Serialize;

/// A variant level within a color family.
///
/// Numeric levels (`100`..`900`) and keywords (`light`, `dark`) are both
/// allowed. The `DEFAULT` entry of a family has no shade at all and is
/// represented as `None` wherever a shade is optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Shade {
    Level(u16),
    Named(String),
}

impl Shade {
    /// Parse a shade key as it appears in a config file or a class name.
    ///
    /// Digit-only keys without a leading zero become [`Shade::Level`] so that
    /// `500` and the class suffix `-500` compare equal. Everything else is kept
    /// verbatim as a keyword.
    pub fn parse(key: &str) -> Self {
        let numeric = !key.is_empty()
            && key.bytes().all(|b| b.is_ascii_digit())
            && (key == "0" || !key.starts_with('0'));

        match key.parse::<u16>() {
            Ok(level) if numeric => Shade::Level(level),
            _ => Shade::Named(key.to_string()),
        }
    }

    /// Parse a config key, mapping `DEFAULT` to the absent shade.
    pub fn from_config_key(key: &str) -> Option<Self> {
        if key == "DEFAULT" {
            None
        } else {
            Some(Self::parse(key))
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shade::Level(level) => write!(f, "{}", level),
            Shade::Named(name) => f.write_str(name),
        }
    }
}

/// Identity of a token within the registry: a family name plus optional shade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TokenKey {
    pub name: String,
    pub shade: Option<Shade>,
}

impl TokenKey {
    pub fn new(name: impl Into<String>, shade: Option<Shade>) -> Self {
        Self {
            name: name.into(),
            shade,
        }
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shade {
            Some(shade) => write!(f, "{}-{}", self.name, shade),
            None => f.write_str(&self.name),
        }
    }
}

/// The two kinds of resolution a token may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionKind {
    Literal,
    Indirect,
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionKind::Literal => write!(f, "literal"),
            ResolutionKind::Indirect => write!(f, "indirect"),
        }
    }
}

/// How a token turns into a CSS value.
///
/// An indirect token is never inlined: it always renders as a `var()`
/// reference to a custom property defined by some other stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Resolution {
    /// A fixed value such as `transparent` or `#ffffff`.
    Literal(String),
    /// The name of a runtime custom property, e.g. `--color-teal-500`.
    Indirect(String),
}

impl Resolution {
    /// Classify a raw config value.
    ///
    /// `var(--name)` becomes [`Resolution::Indirect`]; anything else is a
    /// literal. Returns `None` for a `var(...)` whose argument is not a single
    /// custom property name.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let Some(inner) = value
            .strip_prefix("var(")
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return Some(Resolution::Literal(value.to_string()));
        };

        let inner = inner.trim();
        let is_property_name = inner.len() > 2
            && inner.starts_with("--")
            && inner
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

        is_property_name.then(|| Resolution::Indirect(inner.to_string()))
    }

    pub fn kind(&self) -> ResolutionKind {
        match self {
            Resolution::Literal(_) => ResolutionKind::Literal,
            Resolution::Indirect(_) => ResolutionKind::Indirect,
        }
    }

    /// The value as it appears in an emitted declaration.
    pub fn css_value(&self) -> Cow<'_, str> {
        match self {
            Resolution::Literal(value) => Cow::Borrowed(value),
            Resolution::Indirect(name) => Cow::Owned(format!("var({})", name)),
        }
    }

    /// The custom property this resolution references, if any.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Resolution::Literal(_) => None,
            Resolution::Indirect(name) => Some(name),
        }
    }
}
