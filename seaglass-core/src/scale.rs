use std::{fmt, str::FromStr, sync::LazyLock};

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    #[error("unknown scale key '{key}' for {dimension}")]
    UnknownScaleKey { dimension: Dimension, key: String },

    #[error("unknown scale dimension '{0}'")]
    UnknownDimension(String),
}

/// A style dimension that can be extended from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Height,
    Width,
    MinHeight,
    MaxHeight,
    MinWidth,
    MaxWidth,
    BorderRadius,
    BoxShadow,
    Opacity,
}

impl Dimension {
    pub const ALL: [Dimension; 9] = [
        Dimension::Height,
        Dimension::Width,
        Dimension::MinHeight,
        Dimension::MaxHeight,
        Dimension::MinWidth,
        Dimension::MaxWidth,
        Dimension::BorderRadius,
        Dimension::BoxShadow,
        Dimension::Opacity,
    ];

    /// The config key for this dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Height => "height",
            Dimension::Width => "width",
            Dimension::MinHeight => "minHeight",
            Dimension::MaxHeight => "maxHeight",
            Dimension::MinWidth => "minWidth",
            Dimension::MaxWidth => "maxWidth",
            Dimension::BorderRadius => "borderRadius",
            Dimension::BoxShadow => "boxShadow",
            Dimension::Opacity => "opacity",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == s)
            .ok_or_else(|| ScaleError::UnknownDimension(s.to_string()))
    }
}

const SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("px", "1px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

const FRACTIONS: &[(&str, &str)] = &[
    ("1/2", "50%"),
    ("1/3", "33.333333%"),
    ("2/3", "66.666667%"),
    ("1/4", "25%"),
    ("2/4", "50%"),
    ("3/4", "75%"),
    ("1/5", "20%"),
    ("2/5", "40%"),
    ("3/5", "60%"),
    ("4/5", "80%"),
    ("1/6", "16.666667%"),
    ("5/6", "83.333333%"),
];

const INTRINSIC: &[(&str, &str)] = &[
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const MAX_WIDTH: &[(&str, &str)] = &[
    ("0", "0rem"),
    ("none", "none"),
    ("xs", "20rem"),
    ("sm", "24rem"),
    ("md", "28rem"),
    ("lg", "32rem"),
    ("xl", "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("7xl", "80rem"),
    ("full", "100%"),
    ("prose", "65ch"),
];

const BORDER_RADIUS: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("DEFAULT", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

const BOX_SHADOW: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "DEFAULT",
        "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    ),
    (
        "md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
    ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
    ("none", "none"),
];

const OPACITY: &[(&str, &str)] = &[
    ("0", "0"),
    ("5", "0.05"),
    ("10", "0.1"),
    ("15", "0.15"),
    ("20", "0.2"),
    ("25", "0.25"),
    ("30", "0.3"),
    ("35", "0.35"),
    ("40", "0.4"),
    ("45", "0.45"),
    ("50", "0.5"),
    ("55", "0.55"),
    ("60", "0.6"),
    ("65", "0.65"),
    ("70", "0.7"),
    ("75", "0.75"),
    ("80", "0.8"),
    ("85", "0.85"),
    ("90", "0.9"),
    ("95", "0.95"),
    ("100", "1"),
];

type Scale = IndexMap<&'static str, &'static str>;

fn scale(parts: &[&[(&'static str, &'static str)]]) -> Scale {
    parts.iter().flat_map(|part| part.iter().copied()).collect()
}

/// Built-in base scales, shared by every [`ScaleDefinitions`].
static BASE: LazyLock<IndexMap<Dimension, Scale>> = LazyLock::new(|| {
    IndexMap::from([
        (
            Dimension::Height,
            scale(&[
                SPACING,
                &[("auto", "auto")],
                FRACTIONS,
                &[("full", "100%"), ("screen", "100vh")],
                INTRINSIC,
            ]),
        ),
        (
            Dimension::Width,
            scale(&[
                SPACING,
                &[("auto", "auto")],
                FRACTIONS,
                &[("full", "100%"), ("screen", "100vw")],
                INTRINSIC,
            ]),
        ),
        (
            Dimension::MinHeight,
            scale(&[
                &[("0", "0px"), ("full", "100%"), ("screen", "100vh")],
                INTRINSIC,
            ]),
        ),
        (
            Dimension::MaxHeight,
            scale(&[
                SPACING,
                &[("none", "none"), ("full", "100%"), ("screen", "100vh")],
                INTRINSIC,
            ]),
        ),
        (
            Dimension::MinWidth,
            scale(&[&[("0", "0px"), ("full", "100%")], INTRINSIC]),
        ),
        (Dimension::MaxWidth, scale(&[MAX_WIDTH, INTRINSIC])),
        (Dimension::BorderRadius, scale(&[BORDER_RADIUS])),
        (Dimension::BoxShadow, scale(&[BOX_SHADOW])),
        (Dimension::Opacity, scale(&[OPACITY])),
    ])
});

/// Keyed scales: extensions layered over the built-in base.
///
/// Extensions only ever add or override keys. There is no removal; a base
/// key that is not overridden stays resolvable for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct ScaleDefinitions {
    extensions: IndexMap<Dimension, IndexMap<String, String>>,
}

impl ScaleDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or override one entry. The last extension of a key wins.
    pub fn extend(&mut self, dimension: Dimension, key: impl Into<String>, value: impl Into<String>) {
        self.extensions
            .entry(dimension)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Resolve a key, checking extensions before the base scale.
    pub fn resolve(&self, dimension: Dimension, key: &str) -> Result<&str, ScaleError> {
        self.extension_value(dimension, key)
            .or_else(|| Self::base_value(dimension, key))
            .ok_or_else(|| ScaleError::UnknownScaleKey {
                dimension,
                key: key.to_string(),
            })
    }

    fn extension_value(&self, dimension: Dimension, key: &str) -> Option<&str> {
        self.extensions
            .get(&dimension)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Look up a key in the built-in base scale only.
    pub fn base_value(dimension: Dimension, key: &str) -> Option<&'static str> {
        BASE.get(&dimension)
            .and_then(|entries| entries.get(key))
            .copied()
    }

    /// Position of a key in the merged view: base keys keep their base
    /// index, new extension keys follow in extension order.
    pub fn position(&self, dimension: Dimension, key: &str) -> Option<usize> {
        let base = BASE.get(&dimension);
        if let Some(index) = base.and_then(|entries| entries.get_index_of(key)) {
            return Some(index);
        }

        let offset = base.map_or(0, |entries| entries.len());
        self.extensions
            .get(&dimension)?
            .keys()
            .filter(|ext_key| base.is_none_or(|entries| !entries.contains_key(ext_key.as_str())))
            .position(|ext_key| ext_key == key)
            .map(|index| offset + index)
    }

    /// All entries for a dimension in merged order.
    pub fn entries(&self, dimension: Dimension) -> Vec<(&str, &str)> {
        let mut merged: IndexMap<&str, &str> = BASE
            .get(&dimension)
            .map(|entries| entries.iter().map(|(k, v)| (*k, *v)).collect())
            .unwrap_or_default();

        if let Some(extensions) = self.extensions.get(&dimension) {
            for (key, value) in extensions {
                merged.insert(key.as_str(), value.as_str());
            }
        }

        merged.into_iter().collect()
    }

    /// Extension entries only, in the order they were added.
    pub fn extensions(&self) -> impl Iterator<Item = (Dimension, &str, &str)> {
        self.extensions.iter().flat_map(|(dimension, entries)| {
            entries
                .iter()
                .map(move |(key, value)| (*dimension, key.as_str(), value.as_str()))
        })
    }
}
