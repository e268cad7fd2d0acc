//! Resolve phase - builds the token registry and scale definitions.

use eyre::{Result, WrapErr};
use tracing::debug;

use crate::pipeline::{GenerationContext, Phase};

/// Phase that turns the manifest theme into lookup tables.
///
/// `theme.colors` replaces the built-in palette, `theme.extend` adds to the
/// built-in scales. Both tables are read-only for the rest of the run.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Build the token registry and scale definitions"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let registry = ctx
            .manifest
            .token_registry()
            .wrap_err("failed to build token registry")?;
        let scales = ctx
            .manifest
            .scale_definitions()
            .wrap_err("failed to build scale definitions")?;

        debug!(
            tokens = registry.len(),
            extensions = scales.extensions().count(),
            "resolved theme"
        );
        ctx.registry = Some(registry);
        ctx.scales = Some(scales);
        Ok(())
    }
}
