//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints on the manifest
//! - [`ScanPhase`] - collects candidate class names from content files
//! - [`ResolvePhase`] - builds the token registry and scale definitions
//! - [`FilterPhase`] - keeps the candidates that name a known utility
//! - [`EmitPhase`] - renders the stylesheet

mod emit;
mod filter;
mod resolve;
mod scan;
mod validate;

pub use emit::EmitPhase;
pub use filter::FilterPhase;
pub use resolve::ResolvePhase;
pub use scan::ScanPhase;
pub use validate::{
    CustomPropertyNamingLint, EmptyContentLint, Lint, UnknownPluginLint, ValidatePhase,
};
