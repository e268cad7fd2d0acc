//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// One step of a build.
///
/// Each phase reads what earlier phases stored in the context and adds its
/// own results or diagnostics.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints on the manifest
/// - `ScanPhase` - collects candidate class names from content files
/// - `ResolvePhase` - builds the token registry and scale definitions
/// - `FilterPhase` - keeps the candidates that name a known utility
/// - `EmitPhase` - renders the stylesheet
pub trait Phase: Send + Sync {
    /// Name passed to plugin hooks and used for snapshot files.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}
