//! Filter phase - keeps the candidates that name a known utility.

use std::collections::BTreeSet;

use eyre::{Result, eyre};
use tracing::debug;

use crate::{
    generator::ClassGenerator,
    pipeline::{GenerationContext, Phase},
};

/// Phase that narrows scanned candidates to the used utility classes.
///
/// Unknown classes, unknown tokens and unknown scale keys are dropped here
/// without diagnostics: most candidates are ordinary words.
pub struct FilterPhase;

impl Phase for FilterPhase {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn description(&self) -> &'static str {
        "Keep candidates that resolve to a utility"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let candidates = ctx
            .candidates
            .as_ref()
            .ok_or_else(|| eyre!("filter phase requires scanned candidates"))?;
        let registry = ctx
            .registry
            .as_ref()
            .ok_or_else(|| eyre!("filter phase requires a token registry"))?;
        let scales = ctx
            .scales
            .as_ref()
            .ok_or_else(|| eyre!("filter phase requires scale definitions"))?;

        let generator = ClassGenerator::new(registry, scales, ctx.manifest.dark_mode);
        let used: BTreeSet<String> = candidates
            .iter()
            .filter(|class| generator.rule_for(class).is_some())
            .cloned()
            .collect();

        debug!(
            candidates = candidates.len(),
            used = used.len(),
            "filtered candidates"
        );
        ctx.used = Some(used);
        Ok(())
    }
}
