mod check;
mod completions;
mod imports;
mod resolve;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use imports::ImportsCommand;
use resolve::ResolveCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for fsqlc_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "fsqlc")]
#[command(version)]
#[command(about = "Inspect SQL to F# type bindings and generated file imports")]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Resolve(cmd) => cmd.run(),
            Commands::Imports(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the F# binding of a SQL column type
    Resolve(ResolveCommand),

    /// List the namespaces a generated file opens
    Imports(ImportsCommand),

    /// Report column types that have no F# mapping
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
