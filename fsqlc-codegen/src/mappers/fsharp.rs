//! F# type mapper implementation.
//!
//! Accessors are ADO.NET `IDataReader` getters; see
//! <https://learn.microsoft.com/en-us/dotnet/standard/data/sqlite/types>.

use fsqlc_core::SqlType;
use fsqlc_ir::TypeBinding;

use crate::{ScalarType, TypeMapper};

/// F# type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FSharpTypeMapper;

impl TypeMapper for FSharpTypeMapper {
    fn language(&self) -> &'static str {
        "fsharp"
    }

    fn map_sql_type(&self, sql_type: SqlType) -> ScalarType {
        match sql_type {
            SqlType::Integer => ScalarType::new("int64", "GetInt64", "int64"),
            SqlType::Blob => ScalarType::new("byte[]", "GetBytes", "bytes"),
            SqlType::Real => ScalarType::new("double", "GetDouble", "double"),
            SqlType::Boolean => ScalarType::new("bool", "GetBoolean", "bool"),
            SqlType::DateTime => ScalarType::new("DateTime", "GetDateTime", "dateTime"),
            SqlType::Timestamp => {
                ScalarType::new("DateTimeOffset", "GetDateTimeOffset", "dateTimeOffset")
            }
            SqlType::Text => ScalarType::new("string", "GetString", "string"),
            // serialized through the byte encoder
            SqlType::F32Blob => ScalarType::new("float32[]", "GetF32Blob", "bytes"),
            SqlType::Decimal => ScalarType::new("decimal", "GetDecimal", "decimal"),
        }
    }

    fn map_optional_type(&self, scalar: ScalarType) -> TypeBinding {
        TypeBinding::new(
            format!("{} option", scalar.target_type),
            scalar.accessor,
            format!("{}OrNone", scalar.serializer_tag),
        )
    }
}
