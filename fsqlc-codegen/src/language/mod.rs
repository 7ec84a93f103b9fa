//! Language-specific abstractions.
//!
//! - [`TypeMapper`] - Trait for mapping SQL column types to language types
//! - [`ScalarType`] - One entry of a mapper's type table

mod traits;

pub use traits::{ScalarType, TypeMapper};
