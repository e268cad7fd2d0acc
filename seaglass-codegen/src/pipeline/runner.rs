//! Pipeline orchestrator.

use eyre::Result;
use tracing::debug;

use super::{
    GenerationContext, Phase, Plugin,
    phases::{EmitPhase, FilterPhase, ResolvePhase, ScanPhase, ValidatePhase},
};

/// The build pipeline orchestrator.
///
/// The pipeline manages the execution of phases and plugin hooks. It runs
/// its built-in phases followed by any user phases, calling plugin hooks
/// before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".seaglass/debug"))
///     .phase(RuleBudgetPhase { max_rules: 500 });
///
/// let ctx = pipeline.run(GenerationContext::new(manifest, "."))?;
/// ```
pub struct Pipeline {
    builtin: Vec<Box<dyn Phase>>,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline that runs a full build.
    pub fn new() -> Self {
        Self::with_builtin(vec![
            Box::new(ValidatePhase::new()),
            Box::new(ScanPhase),
            Box::new(ResolvePhase),
            Box::new(FilterPhase),
            Box::new(EmitPhase),
        ])
    }

    /// Create a pipeline that only validates the manifest and builds the
    /// registry and scales, without touching content files.
    pub fn check() -> Self {
        Self::with_builtin(vec![Box::new(ValidatePhase::new()), Box::new(ResolvePhase)])
    }

    fn with_builtin(builtin: Vec<Box<dyn Phase>>) -> Self {
        Self {
            builtin,
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Names of all phases in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.builtin
            .iter()
            .chain(self.phases.iter())
            .map(|phase| phase.name())
            .collect()
    }

    /// Run the pipeline and return the finished context.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. The context, and the
    /// diagnostics in it, are lost; use [`Pipeline::run_in`] to keep them.
    pub fn run(&self, mut ctx: GenerationContext) -> Result<GenerationContext> {
        self.run_in(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on a borrowed context.
    ///
    /// On error the context holds everything recorded up to the failing
    /// phase.
    pub fn run_in(&self, ctx: &mut GenerationContext) -> Result<()> {
        for phase in self.builtin.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), ctx)?;
        }
        Ok(())
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, "{}", phase.description());

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
