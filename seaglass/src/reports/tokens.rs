//! Tokens command report data structures.

use std::io;

use seaglass_codegen::pipeline::TokenSnapshot;
use serde::Serialize;

use super::output::{Output, Report};

/// Registered tokens and scale extensions of a manifest.
#[derive(Debug, Serialize)]
pub struct TokensReport {
    /// Whether `theme.colors` replaced the built-in palette.
    pub declared: bool,
    pub colors: Vec<TokenSnapshot>,
    pub extensions: Vec<ScaleEntry>,
}

/// One `theme.extend` entry.
#[derive(Debug, Serialize)]
pub struct ScaleEntry {
    pub dimension: String,
    pub key: String,
    pub value: String,
}

impl Report for TokensReport {
    fn render(&self, out: &mut dyn Output) -> io::Result<()> {
        let source = if self.declared {
            "declared"
        } else {
            "built-in"
        };
        out.section(&format!("Colors ({}, {})", self.colors.len(), source));
        for token in &self.colors {
            out.key_value_indented(&token.token, &token.resolution.css_value());
        }

        if !self.extensions.is_empty() {
            out.newline();
            out.section(&format!("Scale extensions ({})", self.extensions.len()));
            for entry in &self.extensions {
                out.key_value_indented(&format!("{}.{}", entry.dimension, entry.key), &entry.value);
            }
        }
        Ok(())
    }
}
