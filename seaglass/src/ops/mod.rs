//! Core operations.
//!
//! This module contains the business logic for seaglass commands,
//! separated from CLI argument parsing and output rendering.

pub mod build;
pub mod check;
pub mod tokens;
pub mod watch;

pub use build::{BuildOptions, build};
pub use check::check;
pub use tokens::tokens;
pub use watch::watch;
