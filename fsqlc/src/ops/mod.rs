//! Operations behind the CLI commands.
//!
//! Each operation collects its results into a report; rendering is left to
//! the caller.

mod check;
mod inspect;

use std::path::Path;

use eyre::{Context, Result};
use fsqlc_ir::GenerateRequest;

pub use check::check;
pub use inspect::{imports, resolve};

/// Load a generation request from a JSON file.
pub fn load_request(path: &Path) -> Result<GenerateRequest> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"queries": [{{"name": "ListAuthors", "columns": [{{"name": "id", "type": {{"name": "integer"}}}}]}}]}}"#
        )
        .unwrap();

        let request = load_request(file.path()).unwrap();
        assert_eq!(request.queries.len(), 1);
        assert_eq!(request.queries[0].columns[0].ty.name, "integer");
    }

    #[test]
    fn test_load_request_reports_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_request(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
