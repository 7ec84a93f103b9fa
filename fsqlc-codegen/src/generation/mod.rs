//! Per-file generation outputs.
//!
//! - [`OutputFile`] - Kind of generated file, derived from its name
//! - [`ImportSet`] - Ordered, duplicate-free import list
//! - [`ImportResolver`] - Computes the imports each file opens

mod imports;

pub use imports::{ImportResolver, ImportSet, OutputFile};
