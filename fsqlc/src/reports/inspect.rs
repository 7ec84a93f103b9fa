//! Resolve and imports report data structures.

use fsqlc_codegen::ImportSet;
use fsqlc_core::SqlType;
use fsqlc_ir::TypeBinding;

use super::output::{Output, Report};

/// The binding of one declared type.
#[derive(Debug)]
pub struct ResolveReport {
    pub declared: String,
    /// `None` when the type is not recognized.
    pub family: Option<SqlType>,
    pub binding: TypeBinding,
}

impl Report for ResolveReport {
    fn render(&self, out: &mut dyn Output) {
        if self.family.is_none() {
            out.warning(&format!("'{}' has no F# mapping", self.declared));
        }
        out.key_value("family", self.family.map_or("unrecognized", |f| f.as_str()));
        out.key_value("type", &self.binding.target_type);
        out.key_value("accessor", &self.binding.accessor);
        out.key_value("serializer", &self.binding.serializer_tag);
    }
}

/// The imports of one generated file.
#[derive(Debug)]
pub struct ImportsReport {
    pub imports: ImportSet,
}

impl Report for ImportsReport {
    fn render(&self, out: &mut dyn Output) {
        for import in self.imports.iter() {
            out.preformatted(import);
        }
    }
}
