//! Core types and utilities for the fsqlc F# generator.
//!
//! This crate classifies declared SQL types into a closed set of
//! recognized type families and decides column nullability.

mod sql_type;
mod utils;

pub use sql_type::{Nullability, SqlType};
pub use utils::to_pascal_case;
