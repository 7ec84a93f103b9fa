//! Query annotation: raw request columns to typed queries.

mod queries;

pub use queries::build_queries;
