//! Utility class prefixes and the CSS properties they drive.

use serde::Serialize;

use crate::scale::Dimension;

/// Output grouping for generated rules. Rules are emitted in variant order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Height,
    MinHeight,
    MaxHeight,
    Width,
    MinWidth,
    MaxWidth,
    BorderRadius,
    BackgroundColor,
    BorderColor,
    OutlineColor,
    RingColor,
    TextColor,
    DecorationColor,
    PlaceholderColor,
    AccentColor,
    CaretColor,
    Fill,
    Stroke,
    BoxShadow,
    Opacity,
}

/// A utility whose value comes from the token registry.
#[derive(Debug, PartialEq, Eq)]
pub struct ColorUtility {
    pub prefix: &'static str,
    pub property: &'static str,
    /// Pseudo-element appended to the selector, e.g. `::placeholder`.
    pub pseudo_element: Option<&'static str>,
    pub category: Category,
}

/// A utility whose value comes from a scale.
#[derive(Debug, PartialEq, Eq)]
pub struct ScaleUtility {
    pub prefix: &'static str,
    pub property: &'static str,
    pub dimension: Dimension,
    pub category: Category,
}

const fn color(prefix: &'static str, property: &'static str, category: Category) -> ColorUtility {
    ColorUtility {
        prefix,
        property,
        pseudo_element: None,
        category,
    }
}

pub const COLOR_UTILITIES: &[ColorUtility] = &[
    color("bg", "background-color", Category::BackgroundColor),
    color("text", "color", Category::TextColor),
    color("border", "border-color", Category::BorderColor),
    color("outline", "outline-color", Category::OutlineColor),
    color("ring", "--tw-ring-color", Category::RingColor),
    color("decoration", "text-decoration-color", Category::DecorationColor),
    ColorUtility {
        prefix: "placeholder",
        property: "color",
        pseudo_element: Some("::placeholder"),
        category: Category::PlaceholderColor,
    },
    color("accent", "accent-color", Category::AccentColor),
    color("caret", "caret-color", Category::CaretColor),
    color("fill", "fill", Category::Fill),
    color("stroke", "stroke", Category::Stroke),
];

const fn sized(
    prefix: &'static str,
    property: &'static str,
    dimension: Dimension,
    category: Category,
) -> ScaleUtility {
    ScaleUtility {
        prefix,
        property,
        dimension,
        category,
    }
}

pub const SCALE_UTILITIES: &[ScaleUtility] = &[
    sized("h", "height", Dimension::Height, Category::Height),
    sized("min-h", "min-height", Dimension::MinHeight, Category::MinHeight),
    sized("max-h", "max-height", Dimension::MaxHeight, Category::MaxHeight),
    sized("w", "width", Dimension::Width, Category::Width),
    sized("min-w", "min-width", Dimension::MinWidth, Category::MinWidth),
    sized("max-w", "max-width", Dimension::MaxWidth, Category::MaxWidth),
    sized("rounded", "border-radius", Dimension::BorderRadius, Category::BorderRadius),
    sized("shadow", "box-shadow", Dimension::BoxShadow, Category::BoxShadow),
    sized("opacity", "opacity", Dimension::Opacity, Category::Opacity),
];

impl ScaleUtility {
    /// Split a class into this utility's scale key.
    ///
    /// A bare prefix (`shadow`, `rounded`) selects the `DEFAULT` key.
    pub fn key<'a>(&self, class: &'a str) -> Option<&'a str> {
        let rest = class.strip_prefix(self.prefix)?;
        if rest.is_empty() {
            return Some("DEFAULT");
        }
        rest.strip_prefix('-').filter(|key| !key.is_empty())
    }
}

impl ColorUtility {
    /// Split a class into the part after `<prefix>-`.
    pub fn rest<'a>(&self, class: &'a str) -> Option<&'a str> {
        class
            .strip_prefix(self.prefix)?
            .strip_prefix('-')
            .filter(|rest| !rest.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale_utility(prefix: &str) -> &'static ScaleUtility {
        SCALE_UTILITIES.iter().find(|u| u.prefix == prefix).unwrap()
    }

    #[test]
    fn test_scale_key() {
        assert_eq!(scale_utility("h").key("h-108"), Some("108"));
        assert_eq!(scale_utility("shadow").key("shadow"), Some("DEFAULT"));
        assert_eq!(scale_utility("shadow").key("shadow-mint-glow"), Some("mint-glow"));
        assert_eq!(scale_utility("h").key("hover"), None);
        assert_eq!(scale_utility("h").key("h-"), None);
    }

    #[test]
    fn test_min_max_do_not_collide() {
        assert_eq!(scale_utility("h").key("min-h-screen"), None);
        assert_eq!(scale_utility("min-h").key("min-h-screen"), Some("screen"));
    }

    #[test]
    fn test_color_rest() {
        let bg = &COLOR_UTILITIES[0];
        assert_eq!(bg.rest("bg-teal-500"), Some("teal-500"));
        assert_eq!(bg.rest("bg-"), None);
        assert_eq!(bg.rest("bgx-teal"), None);
    }

    #[test]
    fn test_categories_follow_table_order() {
        assert!(Category::Height < Category::BackgroundColor);
        assert!(Category::BackgroundColor < Category::BoxShadow);
    }
}
