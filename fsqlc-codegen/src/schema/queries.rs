use std::collections::HashSet;

use fsqlc_core::to_pascal_case;
use fsqlc_ir::{Column, Field, GenerateRequest, Query, QueryValue, RawQuery, Struct};
use tracing::trace;

use crate::TypeMapper;

/// Annotate every query of a request with resolved types.
///
/// Parameters become an `<Name>Args` struct. A single result column becomes a
/// scalar return; several become a `<Name>Row` struct.
pub fn build_queries(request: &GenerateRequest, mapper: &dyn TypeMapper) -> Vec<Query> {
    request
        .queries
        .iter()
        .map(|raw| build_query(raw, mapper))
        .collect()
}

fn build_query(raw: &RawQuery, mapper: &dyn TypeMapper) -> Query {
    let name = to_pascal_case(&raw.name);

    let arg = if raw.params.is_empty() {
        QueryValue::Empty
    } else {
        QueryValue::Struct(build_struct(format!("{name}Args"), &raw.params, mapper))
    };

    let ret = match raw.columns.as_slice() {
        [] => QueryValue::Empty,
        [column] => QueryValue::Scalar {
            name: field_name(column, 0),
            binding: mapper.map_column(column),
        },
        columns => QueryValue::Struct(build_struct(format!("{name}Row"), columns, mapper)),
    };

    trace!(query = %name, params = raw.params.len(), columns = raw.columns.len(), "annotated query");
    Query { name, arg, ret }
}

fn build_struct(name: String, columns: &[Column], mapper: &dyn TypeMapper) -> Struct {
    let mut taken: HashSet<String> = HashSet::new();
    let fields = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let name = unique_name(field_name(column, i), &mut taken);
            Field::new(name, mapper.map_column(column))
        })
        .collect();
    Struct::new(name, fields)
}

/// Suffix `base` with the first free counter, starting at 2, and claim the result.
fn unique_name(base: String, taken: &mut HashSet<String>) -> String {
    let mut name = base.clone();
    let mut n = 2;
    while taken.contains(&name) {
        name = format!("{base}{n}");
        n += 1;
    }
    taken.insert(name.clone());
    name
}

fn field_name(column: &Column, index: usize) -> String {
    let name = to_pascal_case(&column.name);
    if name.is_empty() {
        format!("Column{}", index + 1)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use fsqlc_ir::TypeBinding;

    use super::*;
    use crate::FSharpTypeMapper;

    fn raw(name: &str, params: Vec<Column>, columns: Vec<Column>) -> RawQuery {
        RawQuery {
            name: name.into(),
            params,
            columns,
        }
    }

    #[test]
    fn test_query_without_params_or_columns() {
        let request = GenerateRequest {
            queries: vec![raw("delete_all", vec![], vec![])],
        };
        let queries = build_queries(&request, &FSharpTypeMapper);

        assert_eq!(queries[0].name, "DeleteAll");
        assert!(queries[0].arg.is_empty());
        assert!(queries[0].ret.is_empty());
    }

    #[test]
    fn test_single_column_returns_scalar() {
        let request = GenerateRequest {
            queries: vec![raw(
                "CountAuthors",
                vec![],
                vec![Column::new("count", "integer").not_null()],
            )],
        };
        let queries = build_queries(&request, &FSharpTypeMapper);

        assert_eq!(
            queries[0].ret,
            QueryValue::Scalar {
                name: "Count".into(),
                binding: TypeBinding::new("int64", "GetInt64", "int64"),
            }
        );
    }

    #[test]
    fn test_params_and_row_structs() {
        let request = GenerateRequest {
            queries: vec![raw(
                "GetAuthor",
                vec![Column::new("id", "INTEGER").not_null()],
                vec![
                    Column::new("id", "INTEGER").not_null(),
                    Column::new("bio", "text"),
                    Column::new("", "timestamp"),
                ],
            )],
        };
        let query = &build_queries(&request, &FSharpTypeMapper)[0];

        assert_eq!(query.arg.type_name(), Some("GetAuthorArgs"));
        assert_eq!(query.arg.fields()[0].name, "Id");

        assert_eq!(query.ret.type_name(), Some("GetAuthorRow"));
        let fields: Vec<(&str, &str)> = query
            .ret
            .fields()
            .iter()
            .map(|f| (f.name.as_str(), f.type_name()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("Id", "int64"),
                ("Bio", "string option"),
                ("Column3", "DateTimeOffset option"),
            ]
        );
    }

    #[test]
    fn test_duplicate_column_names_get_suffix() {
        let request = GenerateRequest {
            queries: vec![raw(
                "ListBooks",
                vec![],
                vec![
                    Column::new("id", "integer").not_null(),
                    Column::new("id", "integer").not_null(),
                ],
            )],
        };
        let query = &build_queries(&request, &FSharpTypeMapper)[0];

        let names: Vec<&str> = query.ret.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Id", "Id2"]);
    }

    #[test]
    fn test_duplicate_suffix_skips_existing_names() {
        let request = GenerateRequest {
            queries: vec![raw(
                "ListBooks",
                vec![],
                vec![
                    Column::new("id", "integer").not_null(),
                    Column::new("id", "integer").not_null(),
                    Column::new("id2", "integer").not_null(),
                    Column::new("id", "integer").not_null(),
                ],
            )],
        };
        let query = &build_queries(&request, &FSharpTypeMapper)[0];

        let names: Vec<&str> = query.ret.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Id", "Id2", "Id22", "Id3"]);
    }

    #[test]
    fn test_separator_only_names_fall_back_to_position() {
        let request = GenerateRequest {
            queries: vec![raw(
                "ListTags",
                vec![],
                vec![
                    Column::new("_", "text"),
                    Column::new("x", "text"),
                    Column::new("__", "text"),
                    Column::new("-", "text"),
                ],
            )],
        };
        let query = &build_queries(&request, &FSharpTypeMapper)[0];

        let names: Vec<&str> = query.ret.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Column1", "X", "Column3", "Column4"]);
    }
}
