//! Directive re-synthesis
//!
//! Turns one resolved file back into a directive line of the same keyword
//! and dialect as the original match.

use crate::core::models::{Directive, DirectiveKind};

/// Build the directive line for one resolved file
///
/// `namespace` is only honoured for `@use`.
#[must_use]
pub fn synthesize_line(directive: &Directive, path: &str, namespace: Option<&str>) -> String {
    let terminator = directive.syntax.terminator();
    match directive.kind {
        DirectiveKind::Use => {
            let alias = namespace.map(|name| format!(" as {name}")).unwrap_or_default();
            format!("@use \"{path}\"{alias}{terminator}")
        },
        DirectiveKind::Include if directive.load_css => {
            format!("@include meta.load-css(\"{path}\"){terminator}")
        },
        kind => format!("@{kind} \"{path}\"{terminator}"),
    }
}

/// Join the captured prefix, synthesized lines and captured suffix
///
/// Blank entries (including whitespace-only captures) are dropped, so a
/// directive with no files and no comments becomes an empty string.
#[must_use]
pub fn assemble(prefix: &str, lines: &[String], suffix: &str) -> String {
    std::iter::once(prefix)
        .chain(lines.iter().map(String::as_str))
        .chain(std::iter::once(suffix))
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
