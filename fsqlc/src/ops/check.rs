//! Check operation - find columns without an F# mapping.

use fsqlc_codegen::{FSharpTypeMapper, TypeMapper};
use fsqlc_ir::GenerateRequest;
use fsqlc_manifest::Config;
use tracing::debug;

use crate::reports::{CheckReport, UnhandledColumn};

/// Resolve every column of the request and collect the unhandled ones.
pub fn check(request: &GenerateRequest, config: &Config) -> CheckReport {
    let mut columns = 0;
    let mut unhandled = Vec::new();

    for (query, column) in request.columns() {
        columns += 1;
        let binding = FSharpTypeMapper.map_column(column);
        if binding.is_unhandled() {
            debug!(query = %query.name, column = %column.name, "column type not mapped");
            unhandled.push(UnhandledColumn {
                query: query.name.clone(),
                column: column.name.clone(),
                ty: column.ty.data_type(),
            });
        }
    }

    CheckReport {
        columns,
        unhandled,
        strict: config.types.strict,
    }
}
