//! Build pipeline for stylesheet generation.
//!
//! This module provides a [`Pipeline`] orchestrator that runs one build from
//! a parsed manifest to rendered CSS. The pipeline provides:
//!
//! - Explicit phase boundaries (validate → scan → resolve → filter → emit)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`GenerationContext`]
//!
//! # Example
//!
//! ```ignore
//! use seaglass_codegen::pipeline::{GenerationContext, Pipeline};
//!
//! let ctx = GenerationContext::new(manifest, base_dir);
//! let ctx = Pipeline::new().run(ctx)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//! print!("{}", ctx.output.unwrap_or_default());
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::{GenerationContext, InputStylesheet};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin, TokenSnapshot};
