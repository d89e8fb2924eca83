//! Glob resolution for a single directive
//!
//! Expands a directive's pattern under the resolving directory, filters and
//! normalizes the matches, and synthesizes the replacement text.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use sass_glob_import::adapters::fs::StdFileSystem;
//! use sass_glob_import::core::models::ExpansionRules;
//! use sass_glob_import::core::services::{resolve_directive, scan_directives};
//!
//! let directives = scan_directives("@import \"./files/*.scss\";");
//! let expansion = resolve_directive(
//!     &directives[0],
//!     Path::new("/project/styles"),
//!     &ExpansionRules::default(),
//!     &StdFileSystem,
//! )
//! .unwrap();
//! println!("{}", expansion.replacement);
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::collate::locale_cmp;
use super::naming::namespace_for;
use super::paths::{
    fixed_directory, glob_under, has_stylesheet_extension, join_lexical, normalize_relative,
    relative_to,
};
use super::synthesizer::{assemble, synthesize_line};
use crate::core::models::{Directive, ExpansionRules, Warning, expand_braces};
use crate::core::ports::FileSystem;

/// Errors that can occur during resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The filesystem failed while expanding a pattern
    #[error("failed to expand glob pattern \"{pattern}\": {source}")]
    FileSystem {
        /// The glob pattern as written in the directive
        pattern: String,
        /// Underlying fault from the filesystem port
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// The result of expanding one directive
#[derive(Debug, Clone, Serialize)]
pub struct Expansion {
    /// The directive that was expanded
    pub directive: Directive,
    /// Normalized relative paths that produced a line, in output order
    pub files: Vec<String>,
    /// Text that replaces the directive's span
    pub replacement: String,
    /// Warning raised for this directive, if any
    pub warning: Option<Warning>,
}

/// Resolve one directive against the filesystem
///
/// `base` is the directory containing the stylesheet being processed; it
/// should be absolute. Brace groups in the pattern are globbed one
/// alternative at a time and the matches merged. A pattern matching
/// nothing is not an error.
pub fn resolve_directive<F: FileSystem + ?Sized>(
    directive: &Directive,
    base: &Path,
    rules: &ExpansionRules,
    fs: &F,
) -> Result<Expansion, ResolveError> {
    let alternatives = expand_braces(&directive.pattern);

    let mut matches: Vec<PathBuf> = Vec::new();
    for alternative in &alternatives {
        let found = fs.glob(&glob_under(base, alternative)).map_err(|source| {
            ResolveError::FileSystem {
                pattern: directive.pattern.clone(),
                source: source.into(),
            }
        })?;
        matches.extend(found);
    }
    matches.sort_by(|a, b| locale_cmp(&a.to_string_lossy(), &b.to_string_lossy()));
    matches.dedup();

    let missing = alternatives
        .iter()
        .filter_map(|alternative| fixed_directory(alternative))
        .any(|dir| !fs.exists(&join_lexical(base, dir)));
    let warning = missing.then(|| Warning::missing_directory(&directive.pattern));

    let mut files = Vec::new();
    let mut lines = Vec::new();
    for (index, matched) in matches.iter().enumerate() {
        if !has_stylesheet_extension(&matched.to_string_lossy()) {
            continue;
        }

        let relative = normalize_relative(&relative_to(base, matched).to_string_lossy());
        if rules.ignore.is_ignored(&relative) {
            continue;
        }

        let namespace = namespace_for(&rules.namespace, &relative, index);
        lines.push(synthesize_line(directive, &relative, namespace.as_deref()));
        files.push(relative);
    }

    Ok(Expansion {
        directive: directive.clone(),
        replacement: assemble(&directive.prefix, &lines, &directive.suffix),
        files,
        warning,
    })
}
