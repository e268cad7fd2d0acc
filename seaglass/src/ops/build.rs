//! Build operation - content scan to written stylesheet.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, atomic::AtomicBool},
    time::{Duration, Instant},
};

use eyre::{Context, Result};
use seaglass_codegen::{
    builder::OutputStyle,
    pipeline::{GenerationContext, InputStylesheet, Pipeline, SnapshotPlugin},
};
use seaglass_core::OutputFile;
use seaglass_manifest::ConfigFile;
use seaglass_scan::ScanControl;

use crate::reports::{BuildReport, Destination};

/// Options for the build operation.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Stylesheet to splice generated rules into.
    pub input: Option<PathBuf>,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
    pub style: OutputStyle,
    /// Abort the content scan after this long.
    pub timeout: Option<Duration>,
    /// Where to write per-phase JSON snapshots.
    pub snapshot_dir: Option<PathBuf>,
    /// Shared with the Ctrl-C handler.
    pub interrupt: Arc<AtomicBool>,
}

impl BuildOptions {
    fn scan_control(&self) -> ScanControl {
        let control = ScanControl::new().with_interrupt(Arc::clone(&self.interrupt));
        match self.timeout {
            Some(timeout) => control.with_timeout(timeout),
            None => control,
        }
    }
}

/// Execute the build operation.
///
/// Every call starts from the config file on disk, so a rebuild never sees
/// state left over from a previous run.
pub fn build(config: &ConfigFile, opts: &BuildOptions) -> Result<BuildReport> {
    let started = Instant::now();

    let mut ctx = GenerationContext::new(config.manifest().clone(), config.base_dir())
        .with_style(opts.style)
        .with_control(opts.scan_control());
    if let Some(input) = &opts.input {
        ctx = ctx.with_input(InputStylesheet::read(input)?);
    }

    let mut pipeline = Pipeline::new();
    if let Some(dir) = &opts.snapshot_dir {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    let ctx = pipeline.run(ctx).wrap_err("build failed")?;

    let warnings = ctx
        .warnings()
        .map(|d| match &d.location {
            Some(loc) => format!("{}\n  --> {}", d.message, loc),
            None => d.message.clone(),
        })
        .collect();
    let rules = ctx.stylesheet.as_ref().map_or(0, |s| s.len());
    let candidates = ctx.candidates.as_ref().map_or(0, |c| c.len());
    let css = ctx.output.unwrap_or_default();

    let destination = match &opts.output {
        Some(path) => {
            let result = OutputFile::new(path, css)
                .write()
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            Destination::File {
                path: path.clone(),
                result,
            }
        }
        None => Destination::Stdout(css),
    };

    Ok(BuildReport {
        warnings,
        files_scanned: ctx.scanned_files.len(),
        candidates,
        rules,
        destination,
        debug_dir: opts.snapshot_dir.clone(),
        elapsed: started.elapsed(),
    })
}

/// Paths a build writes to, which a watcher must not react to.
pub(crate) fn written_paths(opts: &BuildOptions) -> Vec<&Path> {
    opts.output
        .iter()
        .chain(opts.snapshot_dir.iter())
        .map(PathBuf::as_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use seaglass_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("seaglass.toml"),
            r##"
            [content]
            files = ["*.html"]

            [theme.colors]
            white = "#ffffff"
            "##,
        )
        .unwrap();
        fs::write(
            temp.path().join("index.html"),
            r#"<p class="text-white h-full"></p>"#,
        )
        .unwrap();
        temp
    }

    #[test]
    fn test_build_to_stdout() {
        let temp = project();
        let config = ConfigFile::open(temp.path().join("seaglass.toml")).unwrap();

        let report = build(&config, &BuildOptions::default()).unwrap();

        assert_eq!(report.rules, 2);
        assert_eq!(report.files_scanned, 1);
        match report.destination {
            Destination::Stdout(css) => {
                assert_eq!(
                    css,
                    ".h-full {\n  height: 100%;\n}\n\n.text-white {\n  color: #ffffff;\n}\n"
                );
            }
            other => panic!("expected stdout destination, got {other:?}"),
        }
    }

    #[test]
    fn test_build_to_file_is_stable() {
        let temp = project();
        let config = ConfigFile::open(temp.path().join("seaglass.toml")).unwrap();
        let opts = BuildOptions {
            output: Some(temp.path().join("dist/app.css")),
            style: OutputStyle::Minified,
            ..Default::default()
        };

        let first = build(&config, &opts).unwrap();
        let second = build(&config, &opts).unwrap();

        assert!(matches!(
            first.destination,
            Destination::File {
                result: WriteResult::Written,
                ..
            }
        ));
        assert!(matches!(
            second.destination,
            Destination::File {
                result: WriteResult::Unchanged,
                ..
            }
        ));
        assert_eq!(
            fs::read_to_string(temp.path().join("dist/app.css")).unwrap(),
            ".h-full{height:100%;}.text-white{color:#ffffff;}"
        );
    }

    #[test]
    fn test_build_missing_input() {
        let temp = project();
        let config = ConfigFile::open(temp.path().join("seaglass.toml")).unwrap();
        let opts = BuildOptions {
            input: Some(temp.path().join("missing.css")),
            ..Default::default()
        };

        let err = build(&config, &opts).unwrap_err();
        assert!(err.to_string().contains("failed to read input stylesheet"));
    }

    #[test]
    fn test_written_paths() {
        let opts = BuildOptions {
            output: Some(PathBuf::from("dist/app.css")),
            snapshot_dir: Some(PathBuf::from(".seaglass/debug")),
            ..Default::default()
        };
        assert_eq!(
            written_paths(&opts),
            vec![Path::new("dist/app.css"), Path::new(".seaglass/debug")]
        );
    }
}
