//! Building the token registry and scale definitions from a manifest.
//!
//! `theme.colors` and `theme.extend` follow different policies. Declared
//! colors replace the built-in palette wholesale; extensions are layered on
//! top of the built-in scales and never remove anything.

use std::str::FromStr;

use seaglass_core::{Dimension, RegistryError, ScaleDefinitions, ScaleError, Shade, TokenRegistry};

use super::Manifest;

impl Manifest {
    /// Build the token registry for this manifest.
    pub fn token_registry(&self) -> Result<TokenRegistry, RegistryError> {
        let Some(colors) = &self.theme.colors else {
            return Ok(TokenRegistry::with_defaults());
        };

        let mut registry = TokenRegistry::new();
        for (name, value) in colors {
            for (shade_key, raw) in value.entries() {
                let shade = shade_key.and_then(Shade::from_config_key);
                registry.register_value(name, shade, raw)?;
            }
        }
        Ok(registry)
    }

    /// Build the scale definitions for this manifest.
    pub fn scale_definitions(&self) -> Result<ScaleDefinitions, ScaleError> {
        let mut scales = ScaleDefinitions::new();
        for (dimension, entries) in &self.theme.extend {
            let dimension = Dimension::from_str(dimension)?;
            for (key, value) in entries {
                scales.extend(dimension, key.as_str(), value.as_str());
            }
        }
        Ok(scales)
    }
}
