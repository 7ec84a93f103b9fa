//! Column metadata supplied by the schema collaborator.

use serde::{Deserialize, Serialize};

/// A possibly schema-qualified type name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(default)]
    pub catalog: String,
    #[serde(default)]
    pub schema: String,
    pub name: String,
}

impl Identifier {
    /// Create an unqualified identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a schema-qualified identifier.
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// The declared data type as seen by type resolution.
    ///
    /// The catalog is never included; the schema is prefixed with a dot when set.
    pub fn data_type(&self) -> String {
        if self.schema.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.schema, self.name)
        }
    }
}

/// A single typed column of a table or query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Identifier,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub is_array: bool,
}

impl Column {
    /// Create a nullable, non-array column.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Identifier::new(ty),
            not_null: false,
            is_array: false,
        }
    }

    /// Mark the column as `NOT NULL`.
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark the column as an array.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }
}
