//! Core types for the seaglass stylesheet generator.
//!
//! This crate holds the pure data side of generation: the token registry
//! that maps semantic color names to values, the scale definitions layered
//! over built-in defaults, shadow validation, and the utility tables that
//! tie class-name prefixes to CSS properties.

mod file;
mod mode;
mod registry;
mod scale;
mod shadow;
mod token;
mod utility;

// File operations
pub use file::{OutputFile, WriteResult};
pub use mode::DarkMode;
// Token registry
pub use registry::{RegistryError, TokenRegistry};
// Scales
pub use scale::{Dimension, ScaleDefinitions, ScaleError};
pub use shadow::{ShadowError, ShadowLayer, ShadowSpec};
pub use token::{Resolution, ResolutionKind, Shade, TokenKey};
// Utility tables
pub use utility::{COLOR_UTILITIES, Category, ColorUtility, SCALE_UTILITIES, ScaleUtility};
