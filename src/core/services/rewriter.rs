//! Rewriting driver
//!
//! Scans the whole source once, resolves each wildcard directive in order
//! and splices its replacement over the matched span. Replacement text is
//! never re-scanned.

use std::path::Path;

use super::resolver::{Expansion, ResolveError, resolve_directive};
use super::scanner::scan_directives;
use crate::core::models::ExpansionRules;
use crate::core::ports::FileSystem;

/// Output of one rewrite pass
#[derive(Debug, Clone)]
pub struct Rewrite {
    /// The transformed source text
    pub text: String,
    /// One entry per expanded directive, in source order
    pub expansions: Vec<Expansion>,
}

/// Expand every wildcard directive in `source`
///
/// Missing-directory warnings are logged as they are found and also kept on
/// each [`Expansion`]. The first filesystem fault aborts the pass.
pub fn rewrite<F: FileSystem + ?Sized>(
    source: &str,
    base: &Path,
    rules: &ExpansionRules,
    fs: &F,
) -> Result<Rewrite, ResolveError> {
    let mut text = String::with_capacity(source.len());
    let mut expansions = Vec::new();
    let mut cursor = 0;

    for directive in scan_directives(source) {
        let expansion = resolve_directive(&directive, base, rules, fs)?;
        log::debug!(
            "expanded @{} \"{}\" on line {} into {} file(s)",
            directive.kind,
            directive.pattern,
            directive.line,
            expansion.files.len()
        );
        if let Some(warning) = &expansion.warning {
            log::warn!("{warning}");
        }

        text.push_str(&source[cursor..directive.span.start]);
        text.push_str(&expansion.replacement);
        cursor = directive.span.end;
        expansions.push(expansion);
    }
    text.push_str(&source[cursor..]);

    Ok(Rewrite { text, expansions })
}
