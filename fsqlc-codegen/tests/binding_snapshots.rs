//! Snapshot tests for type bindings and import sets.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use fsqlc_codegen::{FSharpTypeMapper, ImportResolver, TypeMapper, build_queries};
use fsqlc_ir::{Column, GenerateRequest, RawQuery, TypeBinding};

fn render(binding: &TypeBinding) -> String {
    format!(
        "{} | {} | {} | {}",
        binding.target_type, binding.accessor, binding.serializer_tag, binding.is_array
    )
}

fn resolve(ty: &str, not_null: bool, is_array: bool) -> String {
    render(&FSharpTypeMapper.resolve(ty, not_null, is_array))
}

fn authors_request() -> GenerateRequest {
    GenerateRequest {
        queries: vec![
            RawQuery {
                name: "GetAuthor".into(),
                params: vec![Column::new("id", "INTEGER").not_null()],
                columns: vec![
                    Column::new("id", "INTEGER").not_null(),
                    Column::new("name", "TEXT").not_null(),
                    Column::new("bio", "TEXT"),
                ],
            },
            RawQuery {
                name: "CountAuthors".into(),
                params: vec![],
                columns: vec![Column::new("count", "integer").not_null()],
            },
        ],
    }
}

#[test]
fn test_integer_not_null() {
    insta::assert_snapshot!(resolve("INTEGER", true, false), @"int64 | GetInt64 | int64 | false");
}

#[test]
fn test_text_nullable() {
    insta::assert_snapshot!(resolve("TEXT", false, false), @"string option | GetString | stringOrNone | false");
}

#[test]
fn test_timestamp_not_null() {
    insta::assert_snapshot!(
        resolve("TIMESTAMP", true, false),
        @"DateTimeOffset | GetDateTimeOffset | dateTimeOffset | false"
    );
}

#[test]
fn test_unknown_type() {
    insta::assert_snapshot!(
        resolve("mystery_type", true, false),
        @"mystery_type | mystery_type_unhandled_report_issue | mystery_type_unhandled_report_issue | false"
    );
}

#[test]
fn test_boolean_array_stays_optional() {
    insta::assert_snapshot!(resolve("boolean", false, true), @"bool option | GetBoolean | boolOrNone | false");
}

#[test]
fn test_model_file_imports() {
    let queries = build_queries(&authors_request(), &FSharpTypeMapper);
    let imports = ImportResolver::new(&queries).imports("Models.fs", "Foo");

    insta::assert_snapshot!(imports.into_vec().join(", "), @"System, System.Data");
}

#[test]
fn test_query_file_imports() {
    let queries = build_queries(&authors_request(), &FSharpTypeMapper);
    let imports = ImportResolver::new(&queries).imports("Orders.fs", "Foo");

    insta::assert_snapshot!(imports.into_vec().join(", "), @"System, System.Data, Foo.Readers");
}

#[test]
fn test_annotated_row_fields() {
    let queries = build_queries(&authors_request(), &FSharpTypeMapper);
    let rendered: Vec<String> = queries[0]
        .ret
        .fields()
        .iter()
        .map(|f| format!("{}: {}", f.name, f.type_name()))
        .collect();

    insta::assert_snapshot!(rendered.join("; "), @"Id: int64; Name: string; Bio: string option");
}
