use indexmap::IndexMap;
use thiserror::Error;

use crate::{
    token::{Resolution, ResolutionKind, Shade, TokenKey},
    utility::{COLOR_UTILITIES, ColorUtility},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown token '{key}'")]
    UnknownToken { key: TokenKey },

    #[error("token '{key}' is already registered as {existing}, refusing to redefine it as {new}")]
    DuplicateShadeConflict {
        key: TokenKey,
        existing: ResolutionKind,
        new: ResolutionKind,
    },

    #[error("malformed value '{value}' for token '{key}', expected var(--name) or a literal")]
    MalformedValue { key: TokenKey, value: String },
}

/// Palette used when a config does not declare `theme.colors`.
const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("transparent", "transparent"),
    ("current", "currentColor"),
    ("black", "#000000"),
    ("white", "#ffffff"),
];

/// Exact-match store of color tokens in registration order.
///
/// Re-registering a key replaces its resolution but keeps its original
/// position, so output ordering follows first declaration.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    entries: IndexMap<TokenKey, Resolution>,
    strict: bool,
}

impl TokenRegistry {
    /// Create an empty registry with last-write-wins semantics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that rejects resolution kind changes.
    pub fn strict() -> Self {
        Self {
            entries: IndexMap::new(),
            strict: true,
        }
    }

    /// Create a registry seeded with the built-in palette.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, value) in DEFAULT_PALETTE {
            registry
                .entries
                .insert(TokenKey::new(*name, None), Resolution::Literal(value.to_string()));
        }
        registry
    }

    /// Insert or replace a token.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        shade: Option<Shade>,
        resolution: Resolution,
    ) -> Result<(), RegistryError> {
        let key = TokenKey::new(name, shade);

        if self.strict {
            if let Some(existing) = self.entries.get(&key) {
                if existing.kind() != resolution.kind() {
                    return Err(RegistryError::DuplicateShadeConflict {
                        key,
                        existing: existing.kind(),
                        new: resolution.kind(),
                    });
                }
            }
        }

        self.entries.insert(key, resolution);
        Ok(())
    }

    /// Register a raw config value, classifying it as literal or indirect.
    pub fn register_value(
        &mut self,
        name: &str,
        shade: Option<Shade>,
        value: &str,
    ) -> Result<(), RegistryError> {
        match Resolution::parse(value) {
            Some(resolution) => self.register(name, shade, resolution),
            None => Err(RegistryError::MalformedValue {
                key: TokenKey::new(name, shade),
                value: value.to_string(),
            }),
        }
    }

    /// Look up a token by exact name and shade.
    pub fn resolve(&self, name: &str, shade: Option<&Shade>) -> Result<&Resolution, RegistryError> {
        let key = TokenKey::new(name, shade.cloned());
        match self.entries.get(&key) {
            Some(resolution) => Ok(resolution),
            None => Err(RegistryError::UnknownToken { key }),
        }
    }

    /// Registration index of a token, used for stable output ordering.
    pub fn position(&self, key: &TokenKey) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    /// Parse a utility class such as `bg-teal-500` into the token it names.
    ///
    /// Returns the token reference even when that exact shade is not
    /// registered; [`TokenRegistry::resolve`] decides whether it exists.
    pub fn referenced_token(&self, class: &str) -> Option<TokenKey> {
        self.split_color_class(class).map(|(_, key)| key)
    }

    /// Split a utility class into its color utility and token reference.
    pub fn split_color_class(&self, class: &str) -> Option<(&'static ColorUtility, TokenKey)> {
        COLOR_UTILITIES.iter().find_map(|utility| {
            let rest = utility.rest(class)?;
            self.parse_token_ref(rest).map(|key| (utility, key))
        })
    }

    /// Match the longest registered name against `rest`, then parse what
    /// remains as the shade.
    fn parse_token_ref(&self, rest: &str) -> Option<TokenKey> {
        let name = self
            .names()
            .filter(|name| {
                rest == *name
                    || rest
                        .strip_prefix(*name)
                        .is_some_and(|tail| tail.starts_with('-'))
            })
            .max_by_key(|name| name.len())?;

        let tail = &rest[name.len()..];
        if tail.is_empty() {
            return Some(TokenKey::new(name, None));
        }

        let shade = &tail[1..];
        if shade.is_empty() {
            return None;
        }
        Some(TokenKey::new(name, Some(Shade::parse(shade))))
    }

    /// Distinct family names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let mut seen = indexmap::IndexSet::new();
        self.entries
            .keys()
            .map(|key| key.name.as_str())
            .filter(move |name| seen.insert(*name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TokenKey, &Resolution)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
