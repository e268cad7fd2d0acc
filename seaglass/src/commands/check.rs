use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use seaglass_manifest::{CONFIG_FILE, ConfigFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to seaglass.toml (defaults to ./seaglass.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();

        let report = ops::check(&config, &self.config);
        report
            .render(&mut TerminalOutput::new())
            .wrap_err("failed to write report")?;

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
