//! Variant prefixes such as `dark:` and `hover:`.

use std::fmt;

use serde::Serialize;

/// A prefix that conditions a utility on a state or color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Dark,
    Hover,
    Focus,
    FocusVisible,
    Active,
    Disabled,
    Visited,
    First,
    Last,
}

impl Variant {
    pub const ALL: [Variant; 9] = [
        Variant::Dark,
        Variant::Hover,
        Variant::Focus,
        Variant::FocusVisible,
        Variant::Active,
        Variant::Disabled,
        Variant::Visited,
        Variant::First,
        Variant::Last,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.name() == name)
    }

    /// The prefix as written in a class name.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Hover => "hover",
            Variant::Focus => "focus",
            Variant::FocusVisible => "focus-visible",
            Variant::Active => "active",
            Variant::Disabled => "disabled",
            Variant::Visited => "visited",
            Variant::First => "first",
            Variant::Last => "last",
        }
    }

    /// The pseudo-class appended to the selector. `dark` has none; it is
    /// applied through the dark-mode strategy instead.
    pub fn pseudo_class(&self) -> Option<&'static str> {
        match self {
            Variant::Dark => None,
            Variant::Hover => Some(":hover"),
            Variant::Focus => Some(":focus"),
            Variant::FocusVisible => Some(":focus-visible"),
            Variant::Active => Some(":active"),
            Variant::Disabled => Some(":disabled"),
            Variant::Visited => Some(":visited"),
            Variant::First => Some(":first-child"),
            Variant::Last => Some(":last-child"),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split a candidate into its variants and the bare utility.
///
/// Colons inside an arbitrary value (`bg-[url(a:b)]`) do not separate
/// variants. Returns `None` for an unknown or repeated variant, an empty
/// segment, or unbalanced brackets.
pub fn split_variants(class: &str) -> Option<(Vec<Variant>, &str)> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in class.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1)?,
            ':' if depth == 0 => {
                segments.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }

    let utility = &class[start..];
    if utility.is_empty() {
        return None;
    }

    let mut variants = Vec::with_capacity(segments.len());
    for segment in segments {
        let variant = Variant::parse(segment)?;
        if variants.contains(&variant) {
            return None;
        }
        variants.push(variant);
    }

    Some((variants, utility))
}
