//! The class generator: candidate class names in, ordered CSS rules out.
//!
//! Color utilities resolve through the [`TokenRegistry`] and sizing, radius,
//! shadow and opacity utilities through the [`ScaleDefinitions`]. A
//! candidate that matches neither is dropped without a diagnostic, since
//! the scanner deliberately over-approximates.

mod rule;
mod stylesheet;
mod variant;

use seaglass_core::{
    COLOR_UTILITIES, DarkMode, SCALE_UTILITIES, ScaleDefinitions, TokenRegistry,
};

pub(crate) use rule::ResolvedUtility;
pub use rule::{Declaration, Rule};
pub use stylesheet::Stylesheet;
pub use variant::{Variant, split_variants};

/// Position given to arbitrary values so they sort after every named entry.
const ARBITRARY_POSITION: usize = usize::MAX;

/// Resolves candidate class names against a registry and scales.
#[derive(Debug, Clone, Copy)]
pub struct ClassGenerator<'a> {
    registry: &'a TokenRegistry,
    scales: &'a ScaleDefinitions,
    mode: DarkMode,
}

impl<'a> ClassGenerator<'a> {
    pub fn new(registry: &'a TokenRegistry, scales: &'a ScaleDefinitions, mode: DarkMode) -> Self {
        Self {
            registry,
            scales,
            mode,
        }
    }

    /// The rule for one candidate, or `None` if it is not a known utility.
    pub fn rule_for(&self, class: &str) -> Option<Rule> {
        let (variants, utility) = split_variants(class)?;
        let resolved = self
            .resolve_color(utility)
            .or_else(|| self.resolve_scale(utility))?;
        Some(Rule::new(class, &variants, resolved, self.mode))
    }

    /// Generate the ordered stylesheet for a set of used classes.
    pub fn generate<I>(&self, used: I) -> Stylesheet
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let rules = used
            .into_iter()
            .filter_map(|class| self.rule_for(class.as_ref()))
            .collect();
        Stylesheet::from_rules(rules)
    }

    fn resolve_color(&self, utility: &str) -> Option<ResolvedUtility> {
        for color in COLOR_UTILITIES {
            if let Some(value) = color.rest(utility).and_then(arbitrary_value) {
                return Some(ResolvedUtility {
                    property: color.property,
                    value,
                    pseudo_element: color.pseudo_element,
                    category: color.category,
                    position: ARBITRARY_POSITION,
                });
            }
        }

        let (color, key) = self.registry.split_color_class(utility)?;
        let resolution = self.registry.resolve(&key.name, key.shade.as_ref()).ok()?;
        Some(ResolvedUtility {
            property: color.property,
            value: resolution.css_value().into_owned(),
            pseudo_element: color.pseudo_element,
            category: color.category,
            position: self.registry.position(&key)?,
        })
    }

    fn resolve_scale(&self, utility: &str) -> Option<ResolvedUtility> {
        SCALE_UTILITIES.iter().find_map(|scale| {
            let key = scale.key(utility)?;
            let (value, position) = match arbitrary_value(key) {
                Some(value) => (value, ARBITRARY_POSITION),
                None => {
                    let value = self.scales.resolve(scale.dimension, key).ok()?;
                    let position = self
                        .scales
                        .position(scale.dimension, key)
                        .unwrap_or(ARBITRARY_POSITION);
                    (value.to_string(), position)
                }
            };

            Some(ResolvedUtility {
                property: scale.property,
                value,
                pseudo_element: None,
                category: scale.category,
                position,
            })
        })
    }
}

/// Generate the stylesheet for `used` classes.
///
/// Output is a pure function of the inputs: the same used set, registry,
/// scales and mode always render to byte-identical CSS.
pub fn generate<I>(
    used: I,
    registry: &TokenRegistry,
    scales: &ScaleDefinitions,
    mode: DarkMode,
) -> Stylesheet
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ClassGenerator::new(registry, scales, mode).generate(used)
}

/// The value of an arbitrary `[...]` key, with `_` standing in for spaces.
fn arbitrary_value(key: &str) -> Option<String> {
    let inner = key.strip_prefix('[')?.strip_suffix(']')?;
    let value = inner.replace('_', " ");
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use seaglass_core::{Dimension, Shade};

    use super::*;
    use crate::builder::OutputStyle;

    fn registry() -> TokenRegistry {
        let mut registry = TokenRegistry::with_defaults();
        registry
            .register_value("teal", Some(Shade::Level(500)), "var(--color-teal-500)")
            .unwrap();
        registry
            .register_value("teal", Some(Shade::Level(900)), "var(--color-teal-900)")
            .unwrap();
        registry
    }

    #[test]
    fn test_arbitrary_value() {
        assert_eq!(arbitrary_value("[26rem]").as_deref(), Some("26rem"));
        assert_eq!(
            arbitrary_value("[0_0_2px_#000]").as_deref(),
            Some("0 0 2px #000")
        );
        assert_eq!(arbitrary_value("[]"), None);
        assert_eq!(arbitrary_value("[__]"), None);
        assert_eq!(arbitrary_value("26rem"), None);
    }

    #[test]
    fn test_color_rule() {
        let registry = registry();
        let scales = ScaleDefinitions::new();
        let generator = ClassGenerator::new(&registry, &scales, DarkMode::Media);

        let rule = generator.rule_for("bg-teal-500").unwrap();
        assert_eq!(rule.selector, ".bg-teal-500");
        assert_eq!(rule.declarations[0].property, "background-color");
        assert_eq!(rule.declarations[0].value, "var(--color-teal-500)");
    }

    #[test]
    fn test_unregistered_shade_is_dropped() {
        let registry = registry();
        let scales = ScaleDefinitions::new();
        let generator = ClassGenerator::new(&registry, &scales, DarkMode::Media);

        assert!(generator.rule_for("bg-teal-400").is_none());
        assert!(generator.rule_for("bg-teal").is_none());
        assert!(generator.rule_for("bg-purple-500").is_none());
    }

    #[test]
    fn test_placeholder_pseudo_element_follows_pseudo_class() {
        let registry = registry();
        let scales = ScaleDefinitions::new();
        let generator = ClassGenerator::new(&registry, &scales, DarkMode::Media);

        let rule = generator.rule_for("focus:placeholder-white").unwrap();
        assert_eq!(rule.selector, ".focus\\:placeholder-white:focus::placeholder");
    }

    #[test]
    fn test_scale_rules() {
        let registry = registry();
        let mut scales = ScaleDefinitions::new();
        scales.extend(Dimension::Height, "108", "26rem");
        let generator = ClassGenerator::new(&registry, &scales, DarkMode::Media);

        assert_eq!(generator.rule_for("h-108").unwrap().declarations[0].value, "26rem");
        assert_eq!(generator.rule_for("max-w-prose").unwrap().declarations[0].value, "65ch");
        assert_eq!(
            generator.rule_for("rounded").unwrap().declarations[0].value,
            "0.25rem"
        );
        assert_eq!(generator.rule_for("opacity-50").unwrap().declarations[0].value, "0.5");
        assert!(generator.rule_for("h-109").is_none());
    }

    #[test]
    fn test_arbitrary_rules_sort_last_within_category() {
        let registry = registry();
        let scales = ScaleDefinitions::new();
        let stylesheet = generate(
            ["h-[26rem]", "h-full", "h-0"],
            &registry,
            &scales,
            DarkMode::Media,
        );
        assert_eq!(
            stylesheet.classes().collect::<Vec<_>>(),
            vec!["h-0", "h-full", "h-[26rem]"]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let registry = registry();
        let scales = ScaleDefinitions::new();
        let stylesheet = generate(
            ["text-white", "text-white"],
            &registry,
            &scales,
            DarkMode::Class,
        );
        assert_eq!(stylesheet.len(), 1);
        assert_eq!(
            stylesheet.render(OutputStyle::Pretty),
            ".text-white {\n  color: #ffffff;\n}\n"
        );
    }
}
