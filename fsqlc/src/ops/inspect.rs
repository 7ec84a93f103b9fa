//! Single-type and single-file inspection.

use fsqlc_codegen::{FSharpTypeMapper, ImportResolver, OutputFile, TypeMapper, build_queries};
use fsqlc_core::SqlType;
use fsqlc_ir::GenerateRequest;
use tracing::debug;

use crate::reports::{ImportsReport, ResolveReport};

/// Resolve one declared type.
pub fn resolve(ty: &str, not_null: bool, is_array: bool) -> ResolveReport {
    ResolveReport {
        declared: ty.to_string(),
        family: SqlType::classify(ty),
        binding: FSharpTypeMapper.resolve(ty, not_null, is_array),
    }
}

/// Resolve the imports of one generated file.
pub fn imports(request: &GenerateRequest, file_name: &str, package: &str) -> ImportsReport {
    let queries = build_queries(request, &FSharpTypeMapper);
    let file = OutputFile::from_file_name(file_name);
    debug!(file = ?file, queries = queries.len(), "resolving imports");
    let imports = ImportResolver::new(&queries).imports_for(&file, package);

    ImportsReport { imports }
}
