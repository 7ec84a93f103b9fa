//! Raw generation request as produced by the schema collaborator.

use serde::{Deserialize, Serialize};

use crate::Column;

/// All queries of one generation run, before type resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub queries: Vec<RawQuery>,
}

impl GenerateRequest {
    /// Iterate over every parameter and result column of every query.
    pub fn columns(&self) -> impl Iterator<Item = (&RawQuery, &Column)> {
        self.queries.iter().flat_map(|q| {
            q.params
                .iter()
                .chain(q.columns.iter())
                .map(move |col| (q, col))
        })
    }
}

/// A query's parameters and result columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuery {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Column>,
    #[serde(default)]
    pub columns: Vec<Column>,
}
