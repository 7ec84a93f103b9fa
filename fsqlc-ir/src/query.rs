//! Annotated queries: argument and return shapes built from resolved columns.

use crate::TypeBinding;

/// A named member of a [`Struct`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub binding: TypeBinding,
}

impl Field {
    pub fn new(name: impl Into<String>, binding: TypeBinding) -> Self {
        Self {
            name: name.into(),
            binding,
        }
    }

    /// The target type this field is declared with.
    pub fn type_name(&self) -> &str {
        &self.binding.target_type
    }
}

/// An ordered record model for a query's arguments or result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// The argument or return shape of a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryValue {
    #[default]
    Empty,
    /// A single bare value.
    Scalar { name: String, binding: TypeBinding },
    Struct(Struct),
}

impl QueryValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, QueryValue::Empty)
    }

    /// The scalar's target type or the struct's name.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            QueryValue::Empty => None,
            QueryValue::Scalar { binding, .. } => Some(&binding.target_type),
            QueryValue::Struct(s) => Some(&s.name),
        }
    }

    /// Struct fields, or an empty slice for other shapes.
    pub fn fields(&self) -> &[Field] {
        match self {
            QueryValue::Struct(s) => &s.fields,
            _ => &[],
        }
    }
}

/// A query after its columns have been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: String,
    pub arg: QueryValue,
    pub ret: QueryValue,
}

impl Query {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg: QueryValue::Empty,
            ret: QueryValue::Empty,
        }
    }

    pub fn with_arg(mut self, arg: Struct) -> Self {
        self.arg = QueryValue::Struct(arg);
        self
    }

    pub fn with_ret(mut self, ret: QueryValue) -> Self {
        self.ret = ret;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_value_type_name() {
        assert_eq!(QueryValue::Empty.type_name(), None);

        let scalar = QueryValue::Scalar {
            name: "count".into(),
            binding: TypeBinding::new("int64", "GetInt64", "int64"),
        };
        assert_eq!(scalar.type_name(), Some("int64"));
        assert!(scalar.fields().is_empty());

        let row = QueryValue::Struct(Struct::new(
            "GetAuthorRow",
            vec![Field::new(
                "Name",
                TypeBinding::new("string", "GetString", "string"),
            )],
        ));
        assert_eq!(row.type_name(), Some("GetAuthorRow"));
        assert_eq!(row.fields()[0].type_name(), "string");
    }
}
