//! Build command report data structures.

use std::{io, path::PathBuf, time::Duration};

use seaglass_core::WriteResult;

use super::output::{Output, Report};

/// Report data from one stylesheet build.
#[derive(Debug)]
pub struct BuildReport {
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Number of content files read.
    pub files_scanned: usize,
    /// Number of distinct candidate tokens found.
    pub candidates: usize,
    /// Number of emitted rules.
    pub rules: usize,
    /// Where the stylesheet went.
    pub destination: Destination,
    /// Path to debug snapshots, if requested.
    pub debug_dir: Option<PathBuf>,
    pub elapsed: Duration,
}

/// Where a build wrote its stylesheet.
#[derive(Debug)]
pub enum Destination {
    /// No output path; the stylesheet is printed.
    Stdout(String),
    /// Written to a file.
    File { path: PathBuf, result: WriteResult },
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) -> io::Result<()> {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.destination {
            Destination::Stdout(css) => out.raw(css)?,
            Destination::File { path, result } => {
                let verb = match result {
                    WriteResult::Written => "wrote",
                    WriteResult::Unchanged => "unchanged",
                };
                out.status(&format!(
                    "{} {} ({} rule{}, {} file{} scanned, {} candidates) in {}ms",
                    verb,
                    path.display(),
                    self.rules,
                    plural(self.rules),
                    self.files_scanned,
                    plural(self.files_scanned),
                    self.candidates,
                    self.elapsed.as_millis()
                ));
            }
        }

        if let Some(debug_dir) = &self.debug_dir {
            out.status(&format!(
                "pipeline snapshots written to {}",
                debug_dir.display()
            ));
        }
        Ok(())
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordedOutput;

    fn report(destination: Destination) -> BuildReport {
        BuildReport {
            warnings: vec!["custom property '--color-teal-500' is used but never defined".into()],
            files_scanned: 1,
            candidates: 9,
            rules: 3,
            destination,
            debug_dir: None,
            elapsed: Duration::from_millis(4),
        }
    }

    #[test]
    fn test_stdout_destination_keeps_stdout_clean() {
        let mut out = RecordedOutput::default();
        report(Destination::Stdout(".h-108 {\n  height: 26rem;\n}\n".into()))
            .render(&mut out)
            .unwrap();

        assert_eq!(out.stdout, ".h-108 {\n  height: 26rem;\n}\n");
        assert_eq!(
            out.stderr,
            "warning: custom property '--color-teal-500' is used but never defined\n"
        );
    }

    #[test]
    fn test_file_destination_summary() {
        let mut out = RecordedOutput::default();
        report(Destination::File {
            path: PathBuf::from("dist/app.css"),
            result: WriteResult::Written,
        })
        .render(&mut out)
        .unwrap();

        assert!(out.stdout.is_empty());
        assert!(
            out.stderr
                .ends_with("wrote dist/app.css (3 rules, 1 file scanned, 9 candidates) in 4ms\n")
        );
    }
}
