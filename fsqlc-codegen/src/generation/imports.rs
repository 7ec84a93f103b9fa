//! Import resolution for generated F# files.

use std::fmt;

use fsqlc_ir::Query;
use indexmap::IndexSet;
use tracing::trace;

/// Runtime namespace every generated file opens.
const SYSTEM: &str = "System";
/// ADO.NET data access namespace.
const SYSTEM_DATA: &str = "System.Data";
/// Sibling module holding the generated row readers.
const READERS_MODULE: &str = "Readers";

/// The kind of file being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFile {
    /// `Models.fs`: record types for arguments and rows.
    Models,
    /// `Readers.fs`: data reader helpers.
    Readers,
    /// Any other file: query functions.
    Queries(String),
}

impl OutputFile {
    pub const MODELS_FILE: &'static str = "Models.fs";
    pub const READERS_FILE: &'static str = "Readers.fs";

    /// Classify a generated file by its name.
    pub fn from_file_name(name: &str) -> Self {
        match name {
            Self::MODELS_FILE => OutputFile::Models,
            Self::READERS_FILE => OutputFile::Readers,
            other => OutputFile::Queries(other.to_string()),
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            OutputFile::Models => Self::MODELS_FILE,
            OutputFile::Readers => Self::READERS_FILE,
            OutputFile::Queries(name) => name,
        }
    }
}

/// Ordered, duplicate-free list of namespaces a file opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    imports: IndexSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an import. Returns `false` if it was already present.
    pub fn add(&mut self, import: impl Into<String>) -> bool {
        self.imports.insert(import.into())
    }

    pub fn contains(&self, import: &str) -> bool {
        self.imports.contains(import)
    }

    /// Iterate over imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.imports.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ImportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            imports: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ImportSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, import) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "open {import}")?;
        }
        Ok(())
    }
}

/// Computes the imports of each generated file over a set of annotated queries.
///
/// # Example
///
/// ```
/// use fsqlc_codegen::ImportResolver;
///
/// let resolver = ImportResolver::new(&[]);
/// let imports = resolver.imports("Authors.fs", "Db");
/// assert_eq!(imports.into_vec(), vec!["System", "System.Data", "Db.Readers"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImportResolver<'a> {
    queries: &'a [Query],
}

impl<'a> ImportResolver<'a> {
    pub fn new(queries: &'a [Query]) -> Self {
        Self { queries }
    }

    /// Imports for the file with the given name.
    pub fn imports(&self, file_name: &str, package: &str) -> ImportSet {
        self.imports_for(&OutputFile::from_file_name(file_name), package)
    }

    /// Imports for a file of the given kind.
    pub fn imports_for(&self, file: &OutputFile, package: &str) -> ImportSet {
        let imports = match file {
            OutputFile::Models => self.model_imports(),
            OutputFile::Readers => self.reader_imports(),
            OutputFile::Queries(_) => self.query_imports(package),
        };
        trace!(file = file.file_name(), count = imports.len(), "resolved imports");
        imports
    }

    fn model_imports(&self) -> ImportSet {
        let mut imports = base_imports(&|name: &str| self.uses_type(name));
        imports.add(SYSTEM_DATA);
        imports
    }

    fn reader_imports(&self) -> ImportSet {
        let mut imports = base_imports(&|name: &str| self.uses_type_prefix(name));
        imports.add(SYSTEM_DATA);
        imports
    }

    fn query_imports(&self, package: &str) -> ImportSet {
        let mut imports = base_imports(&|name: &str| self.uses_type(name));
        imports.add(SYSTEM_DATA);
        imports.add(format!("{package}.{READERS_MODULE}"));
        imports
    }

    /// Whether any query declares a value of exactly this type.
    ///
    /// Looks at return struct fields, the return type itself and argument
    /// struct fields.
    pub fn uses_type(&self, name: &str) -> bool {
        self.queries.iter().any(|q| {
            q.ret.fields().iter().any(|f| f.type_name() == name)
                || q.ret.type_name() == Some(name)
                || q.arg.fields().iter().any(|f| f.type_name() == name)
        })
    }

    /// Like [`uses_type`](Self::uses_type), but matches types starting with `name`,
    /// so `DateTime` also covers `DateTime option`.
    pub fn uses_type_prefix(&self, name: &str) -> bool {
        self.queries.iter().any(|q| {
            q.ret.type_name().is_some_and(|ty| ty.starts_with(name))
                || q.ret.fields().iter().any(|f| f.type_name().starts_with(name))
                || q.arg.fields().iter().any(|f| f.type_name().starts_with(name))
        })
    }
}

/// Namespaces opened by every generated file.
///
/// Type usage does not narrow this set: `System` is opened unconditionally.
fn base_imports(_uses: &dyn Fn(&str) -> bool) -> ImportSet {
    ImportSet::from_iter([SYSTEM])
}

#[cfg(test)]
mod tests {
    use fsqlc_ir::{Field, QueryValue, Struct, TypeBinding};

    use super::*;

    fn sample_queries() -> Vec<Query> {
        let id = TypeBinding::new("int64", "GetInt64", "int64");
        let created = TypeBinding::new("DateTime option", "GetDateTime", "dateTimeOrNone");
        let name = TypeBinding::new("string", "GetString", "string");

        vec![
            Query::new("GetAuthor")
                .with_arg(Struct::new(
                    "GetAuthorArgs",
                    vec![Field::new("Id", id.clone())],
                ))
                .with_ret(QueryValue::Struct(Struct::new(
                    "GetAuthorRow",
                    vec![Field::new("Name", name), Field::new("CreatedAt", created)],
                ))),
            Query::new("CountAuthors").with_ret(QueryValue::Scalar {
                name: "Count".into(),
                binding: id,
            }),
            Query::new("DeleteAll"),
        ]
    }

    #[test]
    fn test_output_file_from_name() {
        assert_eq!(OutputFile::from_file_name("Models.fs"), OutputFile::Models);
        assert_eq!(OutputFile::from_file_name("Readers.fs"), OutputFile::Readers);
        assert_eq!(
            OutputFile::from_file_name("Authors.fs"),
            OutputFile::Queries("Authors.fs".into())
        );
        // names are matched exactly
        assert_eq!(
            OutputFile::from_file_name("models.fs"),
            OutputFile::Queries("models.fs".into())
        );
        assert_eq!(OutputFile::Queries("Authors.fs".into()).file_name(), "Authors.fs");
    }

    #[test]
    fn test_model_imports_ignore_query_contents() {
        let queries = sample_queries();
        let expected = vec!["System", "System.Data"];

        assert_eq!(
            ImportResolver::new(&queries)
                .imports("Models.fs", "Foo")
                .into_vec(),
            expected
        );
        assert_eq!(
            ImportResolver::new(&[]).imports("Models.fs", "Foo").into_vec(),
            expected
        );
    }

    #[test]
    fn test_reader_imports() {
        let queries = sample_queries();
        let imports = ImportResolver::new(&queries).imports("Readers.fs", "Foo");
        assert_eq!(imports.into_vec(), vec!["System", "System.Data"]);
    }

    #[test]
    fn test_query_imports_end_with_readers_module() {
        let queries = sample_queries();
        let imports = ImportResolver::new(&queries).imports("Orders.fs", "Db");

        assert_eq!(imports.into_vec(), vec!["System", "System.Data", "Db.Readers"]);
    }

    #[test]
    fn test_uses_type_exact() {
        let queries = sample_queries();
        let resolver = ImportResolver::new(&queries);

        assert!(resolver.uses_type("int64"));
        assert!(resolver.uses_type("string"));
        assert!(resolver.uses_type("GetAuthorRow"));
        assert!(resolver.uses_type("DateTime option"));
        assert!(!resolver.uses_type("DateTime"));
        assert!(!resolver.uses_type("decimal"));
    }

    #[test]
    fn test_uses_type_prefix() {
        let queries = sample_queries();
        let resolver = ImportResolver::new(&queries);

        assert!(resolver.uses_type_prefix("DateTime"));
        assert!(resolver.uses_type_prefix("GetAuthor"));
        assert!(!resolver.uses_type_prefix("decimal"));
        assert!(!ImportResolver::new(&[]).uses_type_prefix(""));
    }

    #[test]
    fn test_import_set_deduplicates() {
        let mut imports = ImportSet::new();
        assert!(imports.add("System"));
        assert!(!imports.add("System"));
        assert!(imports.add("System.Data"));

        assert_eq!(imports.len(), 2);
        assert!(imports.contains("System.Data"));
        assert_eq!(imports.to_string(), "open System\nopen System.Data");
    }
}
