use seaglass_core::{Category, DarkMode};
use serde::Serialize;

use super::Variant;
use crate::{builder::CssBuilder, escape::escape_class};

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// Sort key for emitted rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct RuleOrder {
    pub has_variants: bool,
    pub category: Category,
    /// Token or scale position; arbitrary values sort after every entry
    pub position: usize,
}

/// What a utility resolved to, before variants are applied.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedUtility {
    pub property: &'static str,
    pub value: String,
    pub pseudo_element: Option<&'static str>,
    pub category: Category,
    pub position: usize,
}

/// One generated CSS rule for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// The class exactly as it appears in content
    pub class: String,
    pub selector: String,
    /// Media query wrapping the rule, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<&'static str>,
    pub declarations: Vec<Declaration>,
    #[serde(skip)]
    pub(crate) order: RuleOrder,
}

impl Rule {
    pub(crate) fn new(
        class: &str,
        variants: &[Variant],
        resolved: ResolvedUtility,
        mode: DarkMode,
    ) -> Self {
        let dark = variants.contains(&Variant::Dark);

        let mut selector = String::new();
        if dark && mode == DarkMode::Class {
            selector.push('.');
            selector.push_str(DarkMode::ANCESTOR_CLASS);
            selector.push(' ');
        }
        selector.push('.');
        selector.push_str(&escape_class(class));
        for pseudo in variants.iter().filter_map(Variant::pseudo_class) {
            selector.push_str(pseudo);
        }
        if let Some(pseudo_element) = resolved.pseudo_element {
            selector.push_str(pseudo_element);
        }

        let media = (dark && mode == DarkMode::Media).then_some(DarkMode::MEDIA_QUERY);

        Self {
            class: class.to_string(),
            selector,
            media,
            declarations: vec![Declaration {
                property: resolved.property.to_string(),
                value: resolved.value,
            }],
            order: RuleOrder {
                has_variants: !variants.is_empty(),
                category: resolved.category,
                position: resolved.position,
            },
        }
    }

    /// Write the rule body, without any media wrapper.
    pub fn write(&self, builder: &mut CssBuilder) {
        builder.open_block(&self.selector);
        for declaration in &self.declarations {
            builder.push_declaration(&declaration.property, &declaration.value);
        }
        builder.close_block();
    }
}
