//! Classification of declared SQL types.

/// Recognized SQL type families.
///
/// Every declared type string either classifies into one of these variants or
/// is unrecognized. Language mappers match on this enum exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Integer,
    Blob,
    Real,
    Boolean,
    DateTime,
    Timestamp,
    Text,
    /// Vector blob of 32-bit floats (`F32_BLOB(n)`).
    F32Blob,
    Decimal,
}

const INTEGER: &[&str] = &[
    "int",
    "integer",
    "tinyint",
    "smallint",
    "mediumint",
    "bigint",
    "unsignedbigint",
    "int2",
    "int8",
];
const REAL: &[&str] = &["real", "double", "doubleprecision", "float"];
const BOOLEAN: &[&str] = &["boolean", "bool"];
const DATE_TIME: &[&str] = &["date", "datetime"];

const TEXT_PREFIXES: &[&str] = &[
    "character",
    "varchar",
    "varyingcharacter",
    "nchar",
    "nativecharacter",
    "nvarchar",
];
const TEXT_EXACT: &[&str] = &["text", "clob"];

impl SqlType {
    /// All variants, in classification order.
    pub const ALL: [SqlType; 9] = [
        SqlType::Integer,
        SqlType::Blob,
        SqlType::Real,
        SqlType::Boolean,
        SqlType::DateTime,
        SqlType::Timestamp,
        SqlType::Text,
        SqlType::F32Blob,
        SqlType::Decimal,
    ];

    /// Classify a declared type. Matching is case-insensitive.
    ///
    /// Exact keywords are tried first, then prefixes (`varchar(255)`,
    /// `decimal(10,2)`, `f32_blob(3)`). Returns `None` for anything else.
    pub fn classify(declared: &str) -> Option<SqlType> {
        let ty = declared.to_lowercase();
        Self::classify_exact(&ty).or_else(|| Self::classify_prefix(&ty))
    }

    fn classify_exact(ty: &str) -> Option<SqlType> {
        if INTEGER.contains(&ty) {
            Some(SqlType::Integer)
        } else if ty == "blob" {
            Some(SqlType::Blob)
        } else if REAL.contains(&ty) {
            Some(SqlType::Real)
        } else if BOOLEAN.contains(&ty) {
            Some(SqlType::Boolean)
        } else if DATE_TIME.contains(&ty) {
            Some(SqlType::DateTime)
        } else if ty == "timestamp" {
            Some(SqlType::Timestamp)
        } else {
            None
        }
    }

    fn classify_prefix(ty: &str) -> Option<SqlType> {
        if TEXT_PREFIXES.iter().any(|p| ty.starts_with(p)) || TEXT_EXACT.contains(&ty) {
            Some(SqlType::Text)
        } else if ty.starts_with("f32_blob") {
            Some(SqlType::F32Blob)
        } else if ty.starts_with("decimal") || ty == "numeric" {
            Some(SqlType::Decimal)
        } else {
            None
        }
    }

    /// Exact keywords that classify into this family.
    ///
    /// Prefix-matched families list the bare prefixes.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SqlType::Integer => INTEGER,
            SqlType::Blob => &["blob"],
            SqlType::Real => REAL,
            SqlType::Boolean => BOOLEAN,
            SqlType::DateTime => DATE_TIME,
            SqlType::Timestamp => &["timestamp"],
            SqlType::Text => &[
                "character",
                "varchar",
                "varyingcharacter",
                "nchar",
                "nativecharacter",
                "nvarchar",
                "text",
                "clob",
            ],
            SqlType::F32Blob => &["f32_blob"],
            SqlType::Decimal => &["decimal", "numeric"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SqlType::Integer => "integer",
            SqlType::Blob => "blob",
            SqlType::Real => "real",
            SqlType::Boolean => "boolean",
            SqlType::DateTime => "datetime",
            SqlType::Timestamp => "timestamp",
            SqlType::Text => "text",
            SqlType::F32Blob => "f32_blob",
            SqlType::Decimal => "decimal",
        }
    }
}

/// Whether a column maps to the plain or the optional form of its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nullability {
    /// Value always present. Arrays are never null, only empty.
    Definite,
    Optional,
}

impl Nullability {
    /// Decide nullability for a column of the given family.
    ///
    /// Booleans look at `not_null` only; every other family also treats
    /// arrays as definite.
    pub fn of(sql_type: SqlType, not_null: bool, is_array: bool) -> Self {
        let definite = match sql_type {
            SqlType::Boolean => not_null,
            _ => not_null || is_array,
        };
        if definite {
            Nullability::Definite
        } else {
            Nullability::Optional
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Nullability::Optional)
    }
}
