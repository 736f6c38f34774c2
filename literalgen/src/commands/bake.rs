use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use literalgen_manifest::LiteralgenToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to literalgen.toml (defaults to ./literalgen.toml)
    #[arg(short, long, default_value = "literalgen.toml")]
    pub config: PathBuf,

    /// Go file to write
    #[arg(short, long, default_value = "literals_gen.go")]
    pub output: PathBuf,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let file = LiteralgenToml::open(&self.config).unwrap_or_exit();

        let report = ops::bake(
            &file,
            BakeOptions {
                output: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
