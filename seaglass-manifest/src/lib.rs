//! Parsing and validation for seaglass.toml.
//!
//! Errors carry the source text and a labelled span so the binary can render
//! them with miette.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CONFIG_FILE, ColorValue, ConfigFile, ContentConfig, Manifest, ParseContext, Theme,
    parse_manifest,
};
