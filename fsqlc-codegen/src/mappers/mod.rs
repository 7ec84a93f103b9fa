//! Language-specific type mappers.

mod fsharp;

pub use fsharp::FSharpTypeMapper;
