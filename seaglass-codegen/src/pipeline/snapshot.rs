//! Pipeline snapshot plugin for debugging.
//!
//! This module provides a plugin that captures the pipeline state after each
//! phase, so the effect of every phase on a build can be inspected.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::{Result, WrapErr};
use seaglass_core::{Resolution, TokenRegistry};
use serde::Serialize;

use super::{Diagnostic, GenerationContext, Plugin};
use crate::generator::Rule;

/// One registered token in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSnapshot {
    pub token: String,
    pub resolution: Resolution,
}

impl TokenSnapshot {
    /// All tokens of `registry`, in registration order.
    pub fn collect(registry: &TokenRegistry) -> Vec<Self> {
        registry
            .iter()
            .map(|(key, resolution)| Self {
                token: key.to_string(),
                resolution: resolution.clone(),
            })
            .collect()
    }
}

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// Candidate class names (available after "scan" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<BTreeSet<String>>,

    /// Registered tokens (available after "resolve" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenSnapshot>>,

    /// Classes that name a known utility (available after "filter" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<BTreeSet<String>>,

    /// Generated rules in output order (available after "emit" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// Used by `seaglass build --snapshot-dir` to dump intermediate state as
/// JSON, one file per phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".seaglass/debug"));
/// let ctx = pipeline.run(ctx)?;
/// ```
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// Output directory for snapshots.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a snapshot plugin that writes each snapshot as it is taken.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn capture_snapshot(&self, phase: &str, ctx: &GenerationContext) -> PhaseSnapshot {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            candidates: ctx.candidates.clone(),
            tokens: ctx.registry.as_ref().map(TokenSnapshot::collect),
            used: ctx.used.clone(),
            rules: ctx
                .stylesheet
                .as_ref()
                .map(|stylesheet| stylesheet.rules().to_vec()),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.clone());
        snapshot
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create snapshot directory {}", dir.display()))?;
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        let snapshot = self.capture_snapshot(phase, ctx);

        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        Ok(())
    }
}
