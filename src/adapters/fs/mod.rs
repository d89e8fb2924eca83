//! Real filesystem adapter
//!
//! Implements [`FileSystem`] with the `glob` crate and `std::fs`.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::models::MATCH_OPTIONS;
use crate::core::ports::FileSystem;

/// Filesystem access through the host OS
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn glob(&self, pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
        // A pattern the glob syntax rejects matches nothing; only I/O faults
        // while walking the tree are errors.
        let paths = match glob::glob_with(pattern, MATCH_OPTIONS) {
            Ok(paths) => paths,
            Err(err) => {
                log::debug!("pattern {pattern} matches nothing: {err}");
                return Ok(Vec::new());
            },
        };

        let mut matches = Vec::new();
        for entry in paths {
            let path = entry.context("failed to read directory while expanding glob")?;
            matches.push(path);
        }
        Ok(matches)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
