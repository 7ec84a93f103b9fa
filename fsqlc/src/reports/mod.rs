//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod inspect;
mod output;

pub use check::{CheckReport, UnhandledColumn};
pub use inspect::{ImportsReport, ResolveReport};
pub use output::{Report, TerminalOutput};
