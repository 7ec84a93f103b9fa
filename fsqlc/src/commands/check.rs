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
pub struct CheckCommand {
    /// Path to the generation request JSON
    #[arg(short, long)]
    pub request: PathBuf,

    /// Path to fsqlc.toml (defaults to ./fsqlc.toml)
    #[arg(short, long, default_value = "fsqlc.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::from_file(&self.config).unwrap_or_exit();
        let request = ops::load_request(&self.request)?;

        let report = ops::check(&request, &config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
