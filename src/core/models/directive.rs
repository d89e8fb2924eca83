//! Wildcard directive model
//!
//! A [`Directive`] is one line of stylesheet source whose path argument
//! contains a `*`, captured field by field so it can be re-synthesized.

use serde::{Deserialize, Serialize};

/// A span in source text (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// The at-rule keyword a directive was written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    /// `@import "..."`
    Import,
    /// `@use "..."`, optionally namespaced
    Use,
    /// `@include "..."` or `@include meta.load-css("...")`
    Include,
}

impl DirectiveKind {
    /// The keyword as written after `@`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Use => "use",
            Self::Include => "include",
        }
    }
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DirectiveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "import" => Ok(Self::Import),
            "use" => Ok(Self::Use),
            "include" => Ok(Self::Include),
            _ => Err(format!("Invalid directive keyword: {s}. Use: import, use, include")),
        }
    }
}

/// Stylesheet dialect, decides whether statements end in `;`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    /// Brace-and-semicolon syntax
    #[default]
    Scss,
    /// Indented syntax, no statement terminator
    Sass,
}

impl Syntax {
    /// Statement terminator for this dialect
    #[must_use]
    pub const fn terminator(self) -> &'static str {
        match self {
            Self::Scss => ";",
            Self::Sass => "",
        }
    }
}

/// One matched wildcard directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Byte range of the whole matched line
    pub span: Span,
    /// Line number (1-indexed) where the match starts
    pub line: usize,
    /// Leading whitespace and `/* ... */` comment, verbatim
    pub prefix: String,
    /// Directive keyword
    pub kind: DirectiveKind,
    /// Whether the path was wrapped in `meta.load-css(...)`
    pub load_css: bool,
    /// The glob pattern between the quotes
    pub pattern: String,
    /// Trailing whitespace and same-line comment, verbatim
    pub suffix: String,
    /// Dialect detected from the matched text
    pub syntax: Syntax,
}
