//! Ignore patterns applied to resolved stylesheet paths
//!
//! Patterns use shell-glob semantics against the path relative to the
//! resolving directory: `*` stays within one segment, `**` spans
//! segments, `{a,b}` lists alternatives, and dotfiles only match a literal
//! leading dot.

use glob::{MatchOptions, Pattern, PatternError};
use thiserror::Error;

use super::braces::expand_braces;

/// Match options shared by glob expansion and ignore filtering
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// An ignore pattern that failed to compile
#[derive(Debug, Error)]
#[error("invalid ignore pattern \"{pattern}\": {source}")]
pub struct InvalidIgnorePattern {
    /// The pattern as configured
    pub pattern: String,
    /// Underlying glob syntax error
    #[source]
    pub source: PatternError,
}

/// Compiled, ordered set of ignore patterns
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Compile a list of ignore patterns
    ///
    /// Brace groups are expanded first; every alternative must compile.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, InvalidIgnorePattern> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for raw in patterns {
            let raw = raw.as_ref();
            for alternative in expand_braces(raw) {
                let pattern = Pattern::new(&alternative).map_err(|source| InvalidIgnorePattern {
                    pattern: raw.to_string(),
                    source,
                })?;
                compiled.push(pattern);
            }
        }
        Ok(Self { patterns: compiled })
    }

    /// Check whether any pattern matches the normalized relative path
    #[must_use]
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches_with(relative_path, MATCH_OPTIONS))
    }
}
