//! Watch operation - rebuild on file-system changes.

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::Ordering,
        mpsc::{RecvTimeoutError, channel},
    },
    time::{Duration, Instant},
};

use eyre::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use seaglass_manifest::ConfigFile;
use tracing::{debug, warn};

use super::build::{BuildOptions, build, written_paths};
use crate::reports::{Report, TerminalOutput};

/// Quiet period after the last change before a rebuild starts.
const DEBOUNCE: Duration = Duration::from_millis(150);
const POLL: Duration = Duration::from_millis(50);

/// Execute the watch operation.
///
/// Builds once, then rebuilds from scratch whenever something under the
/// config directory (or the input stylesheet) changes. Returns when the
/// interrupt flag in `opts` is set.
pub fn watch(config_path: &Path, opts: &BuildOptions) -> Result<()> {
    let mut out = TerminalOutput::new();
    rebuild(config_path, opts, &mut out);

    let (tx, rx) = channel();
    let mut watcher =
        notify::recommended_watcher(tx).wrap_err("failed to start file watcher")?;
    for (root, mode) in watch_roots(config_path, opts) {
        watcher
            .watch(&root, mode)
            .wrap_err_with(|| format!("failed to watch {}", root.display()))?;
    }

    let ignored: Vec<PathBuf> = written_paths(opts)
        .into_iter()
        .map(absolute)
        .collect();

    eprintln!("watching for changes (press Ctrl+C to stop)...");

    let mut pending: Option<Instant> = None;
    loop {
        if opts.interrupt.load(Ordering::SeqCst) {
            break;
        }

        match rx.recv_timeout(POLL) {
            Ok(Ok(event)) => {
                if is_relevant(&event, &ignored) {
                    debug!(paths = ?event.paths, "change detected");
                    pending = Some(Instant::now());
                }
            }
            Ok(Err(err)) => warn!("watch error: {}", err),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if pending.is_some_and(|at| at.elapsed() >= DEBOUNCE) {
            pending = None;
            eprintln!("change detected, rebuilding...");
            rebuild(config_path, opts, &mut out);
        }
    }

    Ok(())
}

/// One full build; failures are reported and the watch goes on.
fn rebuild(config_path: &Path, opts: &BuildOptions, out: &mut TerminalOutput) {
    let config = match ConfigFile::open(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(*err));
            return;
        }
    };

    match build(&config, opts) {
        Ok(report) => {
            if let Err(err) = report.render(out) {
                eprintln!("error: failed to write stylesheet to stdout: {}", err);
            }
        }
        Err(err) => eprintln!("error: {:#}", err),
    }
}

/// Directories to watch: the config directory recursively, plus the input
/// stylesheet's directory when it lives elsewhere.
fn watch_roots(config_path: &Path, opts: &BuildOptions) -> Vec<(PathBuf, RecursiveMode)> {
    let base = absolute(parent_or_current(config_path));
    let mut roots = vec![(base.clone(), RecursiveMode::Recursive)];

    if let Some(input) = &opts.input {
        let dir = absolute(parent_or_current(input));
        if !dir.starts_with(&base) {
            roots.push((dir, RecursiveMode::NonRecursive));
        }
    }

    roots
}

fn parent_or_current(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Whether an event should trigger a rebuild.
///
/// Reads never do, and neither do events that only touch files the build
/// itself writes.
fn is_relevant(event: &Event, ignored: &[PathBuf]) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    if event.paths.is_empty() {
        return true;
    }
    !event
        .paths
        .iter()
        .all(|path| ignored.iter().any(|ignored| path.starts_with(ignored)))
}
