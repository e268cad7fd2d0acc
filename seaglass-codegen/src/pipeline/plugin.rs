//! Pipeline plugin trait for extensibility.

use eyre::Result;

use super::GenerationContext;

/// A hook into the build pipeline.
///
/// Plugins run before and after every phase and may read or rewrite the
/// context in between. Returning an error from a hook stops the build.
///
/// # Example
///
/// ```ignore
/// /// Fails the build when too many rules would be emitted.
/// struct RuleBudget(usize);
///
/// impl Plugin for RuleBudget {
///     fn name(&self) -> &'static str { "rule-budget" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
///         let used = ctx.used.as_ref().map_or(0, |used| used.len());
///         if phase == "filter" && used > self.0 {
///             eyre::bail!("{} classes used, budget is {}", used, self.0);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// Name used in debug logs.
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }
}
