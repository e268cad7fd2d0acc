//! Class generation and the build pipeline for seaglass.
//!
//! # Module Organization
//!
//! - [`builder`] - CSS text building blocks (CssBuilder, Indent, OutputStyle)
//! - [`generator`] - Candidate classes to ordered rules (ClassGenerator, Stylesheet)
//! - [`pipeline`] - Phase orchestration, lints, plugins and diagnostics

pub mod builder;
mod escape;
pub mod generator;
pub mod pipeline;

pub use escape::escape_class;
pub use generator::{ClassGenerator, Rule, Stylesheet, generate};
