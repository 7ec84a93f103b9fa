use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ResolveCommand {
    /// Declared SQL type (e.g. "INTEGER", "varchar(255)")
    #[arg(value_name = "TYPE")]
    pub ty: String,

    /// Column is declared NOT NULL
    #[arg(long)]
    pub not_null: bool,

    /// Column is an array
    #[arg(long)]
    pub array: bool,
}

impl ResolveCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::resolve(&self.ty, self.not_null, self.array);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
