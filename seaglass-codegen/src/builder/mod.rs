//! Building blocks for writing stylesheet text.

mod css_builder;
mod indent;

pub use css_builder::{CssBuilder, OutputStyle};
pub use indent::Indent;
