//! Intermediate representation types for the fsqlc F# generator.
//!
//! These types describe SQL columns as handed over by the schema collaborator,
//! and the annotated queries consumed by import resolution and rendering.
//!
//! # Architecture
//!
//! ```text
//! request.json → fsqlc-ir (columns) → fsqlc-codegen (bindings, imports) → renderer
//! ```
//!
//! The IR types are:
//! - Target-language agnostic (a binding is just four strings and a flag)
//! - Plain data with no behavior beyond simple accessors
//! - Serializable, so a request can be loaded from JSON

mod binding;
mod column;
mod query;
mod request;

pub use binding::{TypeBinding, UNHANDLED_SUFFIX};
pub use column::{Column, Identifier};
pub use query::{Field, Query, QueryValue, Struct};
pub use request::{GenerateRequest, RawQuery};
