//! Non-fatal diagnostics raised while expanding directives

use serde::{Deserialize, Serialize};

/// A warning attached to one directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The fixed directory in front of the first `*` does not exist
    MissingDirectory {
        /// The glob pattern as written in the directive
        pattern: String,
    },
}

impl Warning {
    /// Create a missing-directory warning
    #[must_use]
    pub fn missing_directory(pattern: impl Into<String>) -> Self {
        Self::MissingDirectory {
            pattern: pattern.into(),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDirectory { pattern } => write!(
                f,
                "Sass Glob Import: Directories don't exist for the glob pattern \"{pattern}\""
            ),
        }
    }
}
