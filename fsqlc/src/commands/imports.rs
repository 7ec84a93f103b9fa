use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fsqlc_manifest::Config;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ImportsCommand {
    /// Generated file name (e.g. "Models.fs", "Readers.fs", "Authors.fs")
    pub file: String,

    /// Path to the generation request JSON
    #[arg(short, long)]
    pub request: PathBuf,

    /// Path to fsqlc.toml (defaults to ./fsqlc.toml)
    #[arg(short, long, default_value = "fsqlc.toml")]
    pub config: PathBuf,

    /// Package name, instead of reading it from fsqlc.toml
    #[arg(short, long)]
    pub package: Option<String>,
}

impl ImportsCommand {
    pub fn run(&self) -> Result<()> {
        let package = match &self.package {
            Some(package) => package.clone(),
            None => Config::from_file(&self.config).unwrap_or_exit().package.name,
        };
        let request = ops::load_request(&self.request)?;

        let report = ops::imports(&request, &self.file, &package);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
