//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing glob expansion.

use std::fs;
use std::path::{Path, PathBuf};

use sass_glob_import::core::ports::FileSystem;
use tempfile::TempDir;

/// A stylesheet tree on disk
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new tree with standard structure:
    /// ```text
    /// /
    /// ├── files/
    /// │   ├── _file-a.scss
    /// │   ├── _file-b.scss
    /// │   └── notes.txt
    /// ├── components/
    /// │   ├── _button.scss
    /// │   ├── _card.scss
    /// │   └── forms/
    /// │       └── _text_input.scss
    /// └── main.scss
    /// ```
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let tree = Self { dir };

        tree.add_file("files/_file-a.scss", ".a { color: red; }\n");
        tree.add_file("files/_file-b.scss", ".b { color: blue; }\n");
        tree.add_file("files/notes.txt", "not a stylesheet\n");
        tree.add_file("components/_button.scss", ".button {}\n");
        tree.add_file("components/_card.scss", ".card {}\n");
        tree.add_file("components/forms/_text_input.scss", ".input {}\n");
        tree.add_file("main.scss", "@import \"./files/*.scss\";\n");

        tree
    }

    /// Get the root path of the tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Add an empty directory
    pub fn add_dir(&self, path: &str) {
        fs::create_dir_all(self.dir.path().join(path)).unwrap();
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Filesystem returning a fixed glob result
#[derive(Debug, Default)]
pub struct StaticFs {
    pub matches: Vec<PathBuf>,
    pub exists: bool,
}

impl StaticFs {
    pub fn new(matches: &[&str], exists: bool) -> Self {
        Self {
            matches: matches.iter().map(PathBuf::from).collect(),
            exists,
        }
    }
}

impl FileSystem for StaticFs {
    fn glob(&self, _pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
        Ok(self.matches.clone())
    }

    fn exists(&self, _path: &Path) -> bool {
        self.exists
    }
}

/// Filesystem whose glob always faults
#[derive(Debug, Default)]
pub struct FailingFs;

impl FileSystem for FailingFs {
    fn glob(&self, pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
        anyhow::bail!("permission denied while listing {pattern}")
    }

    fn exists(&self, _path: &Path) -> bool {
        true
    }
}
