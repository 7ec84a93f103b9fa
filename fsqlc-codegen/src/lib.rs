//! Type mapping and import resolution for the fsqlc F# generator.
//!
//! # Module Organization
//!
//! - [`language`] - The [`TypeMapper`](language::TypeMapper) trait shared by target languages
//! - [`mappers`] - Target language mappers ([`FSharpTypeMapper`](mappers::FSharpTypeMapper))
//! - [`generation`] - Per-file import resolution ([`ImportResolver`](generation::ImportResolver))
//! - [`schema`] - Turning raw request columns into annotated queries
//!
//! Everything here is pure: no I/O and no state retained between calls.

pub mod generation;
pub mod language;
pub mod mappers;
pub mod schema;

pub use generation::{ImportResolver, ImportSet, OutputFile};
pub use language::{ScalarType, TypeMapper};
pub use mappers::FSharpTypeMapper;
pub use schema::build_queries;
