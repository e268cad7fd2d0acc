use std::collections::BTreeSet;

use serde::Serialize;

use super::Rule;
use crate::builder::{CssBuilder, OutputStyle};

/// The ordered set of rules produced for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    /// Order rules and drop repeated classes.
    pub(crate) fn from_rules(mut rules: Vec<Rule>) -> Self {
        rules.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.class.cmp(&b.class)));
        rules.dedup_by(|a, b| a.class == b.class);
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Classes that produced a rule, in output order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.class.as_str())
    }

    /// Custom properties referenced through `var()` in any declaration.
    pub fn referenced_variables(&self) -> BTreeSet<&str> {
        self.rules
            .iter()
            .flat_map(|rule| &rule.declarations)
            .flat_map(|declaration| variables_in(&declaration.value))
            .collect()
    }

    /// Render all rules. Consecutive rules under the same media query share
    /// one `@media` block.
    pub fn render(&self, style: OutputStyle) -> String {
        let mut builder = CssBuilder::for_style(style);
        let mut rules = self.rules.iter().peekable();
        let mut first = true;

        while let Some(rule) = rules.next() {
            if !first {
                builder.push_blank();
            }
            first = false;

            let Some(query) = rule.media else {
                rule.write(&mut builder);
                continue;
            };

            builder.open_block(&format!("@media {}", query));
            rule.write(&mut builder);
            while let Some(next) = rules.next_if(|next| next.media == Some(query)) {
                builder.push_blank();
                next.write(&mut builder);
            }
            builder.close_block();
        }

        builder.build()
    }
}

/// Names of the custom properties in `var(--name)` references.
fn variables_in(value: &str) -> impl Iterator<Item = &str> {
    value.match_indices("var(").filter_map(move |(pos, _)| {
        let rest = value[pos + 4..].trim_start();
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(rest.len());
        let name = &rest[..end];
        (name.len() > 2 && name.starts_with("--")).then_some(name)
    })
}
