//! Resolved type bindings.

use serde::{Deserialize, Serialize};

/// Suffix carried by the accessor and serializer tag of a sentinel binding.
pub const UNHANDLED_SUFFIX: &str = "_unhandled_report_issue";

/// The target-language view of a column: type, reader accessor and serializer tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeBinding {
    /// Type used in generated declarations (e.g. `int64 option`).
    pub target_type: String,
    /// Data reader method used to extract the raw value (e.g. `GetInt64`).
    pub accessor: String,
    /// Serialization strategy label (e.g. `int64OrNone`).
    pub serializer_tag: String,
    pub is_array: bool,
}

impl TypeBinding {
    pub fn new(
        target_type: impl Into<String>,
        accessor: impl Into<String>,
        serializer_tag: impl Into<String>,
    ) -> Self {
        Self {
            target_type: target_type.into(),
            accessor: accessor.into(),
            serializer_tag: serializer_tag.into(),
            is_array: false,
        }
    }

    /// Fallback binding for a type no mapping recognizes.
    ///
    /// The type name is embedded in every string so the generated code carries
    /// an obviously broken identifier instead of generation aborting.
    pub fn unhandled(ty: &str) -> Self {
        let marker = format!("{ty}{UNHANDLED_SUFFIX}");
        Self {
            target_type: ty.to_string(),
            accessor: marker.clone(),
            serializer_tag: marker,
            is_array: false,
        }
    }

    /// Whether this is a sentinel produced by [`TypeBinding::unhandled`].
    pub fn is_unhandled(&self) -> bool {
        self.accessor
            .strip_suffix(UNHANDLED_SUFFIX)
            .is_some_and(|ty| ty == self.target_type)
            && self.serializer_tag == self.accessor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhandled_binding() {
        let binding = TypeBinding::unhandled("foobar");
        assert_eq!(binding.target_type, "foobar");
        assert_eq!(binding.accessor, "foobar_unhandled_report_issue");
        assert_eq!(binding.serializer_tag, "foobar_unhandled_report_issue");
        assert!(!binding.is_array);
        assert!(binding.is_unhandled());
    }

    #[test]
    fn test_regular_binding_is_handled() {
        let binding = TypeBinding::new("int64", "GetInt64", "int64");
        assert!(!binding.is_unhandled());
    }
}
