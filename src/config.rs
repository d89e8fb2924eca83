//! On-disk configuration
//!
//! Options can be stored in a `.sassglob.toml` file next to the
//! stylesheets or in any ancestor directory:
//!
//! ```toml
//! ignore_paths = ["**/_legacy-*.scss"]
//! namespace = "*"   # or `true` to derive names from paths
//! ```
//!
//! A custom namespace function has no file representation; set it through
//! [`LoaderOptions`] directly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::NamespaceStrategy;
use crate::loader::LoaderOptions;

/// Configuration filename searched for
pub const CONFIG_FILE: &str = ".sassglob.toml";

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Namespace setting as written in TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NamespaceSetting {
    /// `namespace = true` derives names, `false` disables them
    Flag(bool),
    /// `namespace = "*"` uses the string verbatim
    Name(String),
}

impl From<NamespaceSetting> for NamespaceStrategy {
    fn from(setting: NamespaceSetting) -> Self {
        match setting {
            NamespaceSetting::Flag(enabled) => Self::from_flag(enabled),
            NamespaceSetting::Name(name) => Self::Literal(name),
        }
    }
}

/// Contents of a `.sassglob.toml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Glob patterns excluded from expansion
    #[serde(default)]
    pub ignore_paths: Vec<String>,
    /// Namespace strategy for `@use`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<NamespaceSetting>,
}

impl ConfigFile {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find the nearest config file from `from` upwards
    #[must_use]
    pub fn discover(from: &Path) -> Option<PathBuf> {
        let start = if from.is_file() { from.parent()? } else { from };
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest config file, or defaults when there is none
    pub fn load_nearest(from: &Path) -> Result<Self, ConfigError> {
        match Self::discover(from) {
            Some(path) => {
                log::debug!("using config {}", path.display());
                Self::load(&path)
            },
            None => Ok(Self::default()),
        }
    }
}

impl From<ConfigFile> for LoaderOptions {
    fn from(config: ConfigFile) -> Self {
        Self {
            namespace: config.namespace.map(Into::into).unwrap_or_default(),
            ignore_paths: config.ignore_paths,
        }
    }
}
