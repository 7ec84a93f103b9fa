//! Language-agnostic type mapping trait.

use fsqlc_core::{Nullability, SqlType};
use fsqlc_ir::{Column, TypeBinding};
use tracing::debug;

/// The plain (non-optional) mapping of one SQL type family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarType {
    pub target_type: &'static str,
    pub accessor: &'static str,
    pub serializer_tag: &'static str,
}

impl ScalarType {
    pub const fn new(
        target_type: &'static str,
        accessor: &'static str,
        serializer_tag: &'static str,
    ) -> Self {
        Self {
            target_type,
            accessor,
            serializer_tag,
        }
    }

    /// Binding for a column whose value is always present.
    pub fn binding(&self) -> TypeBinding {
        TypeBinding::new(self.target_type, self.accessor, self.serializer_tag)
    }
}

/// Trait for mapping SQL column types to language-specific type bindings.
///
/// Implementors supply the per-family table and the optional wrapping;
/// classification, nullability and the unrecognized-type fallback are shared.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a recognized SQL type family to its plain target type
    fn map_sql_type(&self, sql_type: SqlType) -> ScalarType;

    /// Map the optional form of a type (e.g. `int64 option` in F#)
    ///
    /// The accessor stays the same: null checks happen at the call site.
    fn map_optional_type(&self, scalar: ScalarType) -> TypeBinding;

    /// Resolve a declared SQL type into a binding.
    ///
    /// Never fails. An unrecognized type yields [`TypeBinding::unhandled`]
    /// for the lowercased type name.
    fn resolve(&self, declared: &str, not_null: bool, is_array: bool) -> TypeBinding {
        let ty = declared.to_lowercase();
        let Some(sql_type) = SqlType::classify(&ty) else {
            debug!(language = self.language(), ty = %ty, "unhandled sql type");
            return TypeBinding::unhandled(&ty);
        };

        let scalar = self.map_sql_type(sql_type);
        match Nullability::of(sql_type, not_null, is_array) {
            Nullability::Definite => scalar.binding(),
            Nullability::Optional => self.map_optional_type(scalar),
        }
    }

    /// Resolve a column using its schema-qualified data type
    fn map_column(&self, column: &Column) -> TypeBinding {
        self.resolve(&column.ty.data_type(), column.not_null, column.is_array)
    }
}
