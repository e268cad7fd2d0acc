use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use clap::Args;
use eyre::{Context, Result};
use seaglass_codegen::builder::OutputStyle;
use seaglass_manifest::{CONFIG_FILE, ConfigFile};

use super::UnwrapOrExit;
use crate::{
    ops::{self, BuildOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    /// Path to seaglass.toml (defaults to ./seaglass.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Stylesheet to copy through; `@tailwind utilities;` marks where rules go
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rebuild whenever a watched file changes
    #[arg(short, long)]
    pub watch: bool,

    /// Emit rules without whitespace
    #[arg(long)]
    pub minify: bool,

    /// Abort the content scan after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Write a JSON snapshot of every pipeline phase into this directory
    #[arg(long, value_name = "DIR")]
    pub snapshot_dir: Option<PathBuf>,
}

impl BuildCommand {
    /// Run the build command
    pub fn run(&self) -> Result<()> {
        let interrupt = Arc::new(AtomicBool::new(false));
        let handler_flag = Arc::clone(&interrupt);
        ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
            .wrap_err("failed to install Ctrl-C handler")?;

        let opts = BuildOptions {
            input: self.input.clone(),
            output: self.output.clone(),
            style: if self.minify {
                OutputStyle::Minified
            } else {
                OutputStyle::Pretty
            },
            timeout: self.timeout_ms.map(Duration::from_millis),
            snapshot_dir: self.snapshot_dir.clone(),
            interrupt,
        };

        if self.watch {
            // Config errors are reported per rebuild instead of ending the watch
            return ops::watch(&self.config, &opts);
        }

        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let report = ops::build(&config, &opts)?;
        report
            .render(&mut TerminalOutput::new())
            .wrap_err("failed to write stylesheet to stdout")?;

        Ok(())
    }
}
