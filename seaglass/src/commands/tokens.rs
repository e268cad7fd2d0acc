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
pub struct TokensCommand {
    /// Path to seaglass.toml (defaults to ./seaglass.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Print the tokens as JSON
    #[arg(long)]
    pub json: bool,
}

impl TokensCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let report = ops::tokens(config.manifest())?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report
                .render(&mut TerminalOutput::new())
                .wrap_err("failed to write report")?;
        }

        Ok(())
    }
}
