//! Configuration for the fsqlc F# generator.
//!
//! ```toml
//! [package]
//! name = "Db"
//!
//! [types]
//! strict = false
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod validate;

pub use config::{Config, PackageConfig, TypesConfig};
pub use error::{Error, Result};
