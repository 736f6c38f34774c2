use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use literalgen_manifest::LiteralgenToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to literalgen.toml (defaults to ./literalgen.toml)
    #[arg(short, long, default_value = "literalgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = LiteralgenToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(&file)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
