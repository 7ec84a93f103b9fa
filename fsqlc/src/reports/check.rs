//! Check command report data structures.

use super::output::{Output, Report};

/// A column whose declared type has no mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnhandledColumn {
    pub query: String,
    pub column: String,
    pub ty: String,
}

/// Report data from type checking a request.
#[derive(Debug)]
pub struct CheckReport {
    /// Number of columns resolved.
    pub columns: usize,
    pub unhandled: Vec<UnhandledColumn>,
    /// Whether unhandled columns are errors.
    pub strict: bool,
}

impl CheckReport {
    /// Whether the check passed.
    pub fn is_valid(&self) -> bool {
        !self.strict || self.unhandled.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for col in &self.unhandled {
            let msg = format!(
                "{}: column '{}' has unhandled type '{}'",
                col.query, col.column, col.ty
            );
            if self.strict {
                out.error(&msg);
            } else {
                out.warning(&msg);
            }
        }

        if !self.unhandled.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} column{} checked",
                self.columns,
                if self.columns == 1 { "" } else { "s" }
            ));
        }
    }
}
