//! Built-in lints for manifest validation.

mod custom_property_naming;
mod empty_content;
mod unknown_plugin;

pub use custom_property_naming::CustomPropertyNamingLint;
pub use empty_content::EmptyContentLint;
pub use unknown_plugin::UnknownPluginLint;
