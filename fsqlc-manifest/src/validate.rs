//! Validation of F# namespace names.

use miette::SourceSpan;

use crate::{Error, Result};

/// F# reserved keywords that cannot be used as namespace segments
/// Source: https://learn.microsoft.com/en-us/dotnet/fsharp/language-reference/keyword-reference
pub(crate) const FSHARP_KEYWORDS: &[&str] = &[
    "abstract", "and", "as", "assert", "base", "begin", "class", "default", "delegate", "do",
    "done", "downcast", "downto", "elif", "else", "end", "exception", "extern", "false",
    "finally", "fixed", "for", "fun", "function", "global", "if", "in", "inherit", "inline",
    "interface", "internal", "lazy", "let", "match", "member", "module", "mutable", "namespace",
    "new", "not", "null", "of", "open", "or", "override", "private", "public", "rec", "return",
    "select", "sig", "static", "struct", "then", "to", "true", "try", "type", "upcast", "use",
    "val", "void", "when", "while", "with", "yield",
];

pub(crate) fn is_fsharp_keyword(name: &str) -> bool {
    FSHARP_KEYWORDS.contains(&name)
}

/// Validate a dotted package name such as `MyApp.Db`.
pub(crate) fn validate_package(name: &str, src: &str, filename: &str) -> Result<()> {
    let span = find_package_name_span(src, name);

    if name.is_empty() {
        return Err(Error::invalid_package_name(
            name,
            "package name cannot be empty",
            src,
            filename,
            span,
        ));
    }

    for segment in name.split('.') {
        if let Some(reason) = validate_segment(segment) {
            return Err(Error::invalid_package_name(
                name, reason, src, filename, span,
            ));
        }
        if is_fsharp_keyword(segment) {
            return Err(Error::reserved_keyword(name, segment, src, filename, span));
        }
    }

    Ok(())
}

/// Find the span of `[package] name`'s value, excluding quotes
///
/// Falls back to the first quoted occurrence for inline or dotted tables.
pub(crate) fn find_package_name_span(src: &str, value: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    let mut in_package = false;

    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with('[') {
            in_package = trimmed.starts_with("[package]");
        } else if in_package && is_key(trimmed, "name") {
            if let Some(span) = find_value_span(line, value) {
                return Some(SourceSpan::from((offset + span.offset(), span.len())));
            }
        }
        offset += line.len();
    }

    find_value_span(src, value)
}

fn is_key(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

/// Find the span of a string value in the TOML source, excluding quotes
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Returns None if the segment is a valid identifier, Some(reason) otherwise
pub(crate) fn validate_segment(segment: &str) -> Option<&'static str> {
    let mut chars = segment.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("each segment must start with a letter or underscore"),
        None => return Some("segments cannot be empty"),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("each segment must contain only letters, numbers, and underscores")
    }
}
