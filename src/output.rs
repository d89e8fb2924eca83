//! Output formatting for human and JSON modes
//!
//! CLI results render either as human-readable text or machine-parseable
//! JSON.

use serde::Serialize;

use crate::core::services::Expansion;
use crate::loader::Transformed;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a scan operation
#[derive(Debug, Serialize)]
pub struct ScanResult {
    /// The stylesheet that was scanned
    pub file: String,
    /// Wildcard directives found, in source order
    pub directives: Vec<DirectiveReport>,
}

/// One wildcard directive and what it resolves to
#[derive(Debug, Serialize)]
pub struct DirectiveReport {
    /// Line number (1-indexed)
    pub line: usize,
    /// Directive keyword
    pub keyword: String,
    /// Glob pattern as written
    pub pattern: String,
    /// Files the directive expands to
    pub files: Vec<String>,
    /// Warning text, if the pattern's directory is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<&Expansion> for DirectiveReport {
    fn from(expansion: &Expansion) -> Self {
        let directive = &expansion.directive;
        let keyword = if directive.load_css {
            format!("{} meta.load-css", directive.kind)
        } else {
            directive.kind.to_string()
        };
        Self {
            line: directive.line,
            keyword,
            pattern: directive.pattern.clone(),
            files: expansion.files.clone(),
            warning: expansion.warning.as_ref().map(ToString::to_string),
        }
    }
}

impl ScanResult {
    /// Build a report from a transformation
    #[must_use]
    pub fn new(file: impl Into<String>, transformed: &Transformed) -> Self {
        Self {
            file: file.into(),
            directives: transformed.expansions.iter().map(DirectiveReport::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        use std::fmt::Write as _;

        if self.directives.is_empty() {
            return format!("{}: no wildcard directives.\n", self.file);
        }

        let mut out = format!("{}: {} wildcard directive(s)\n\n", self.file, self.directives.len());
        for d in &self.directives {
            let _ = writeln!(out, "  line {}: @{} \"{}\"", d.line, d.keyword, d.pattern);
            if let Some(warning) = &d.warning {
                let _ = writeln!(out, "          warning: {warning}");
            }
            if d.files.is_empty() {
                let _ = writeln!(out, "          (no files)");
            }
            for file in &d.files {
                let _ = writeln!(out, "          {file}");
            }
            out.push('\n');
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
