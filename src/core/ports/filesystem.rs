//! Filesystem port
//!
//! Defines the only I/O the expansion core performs: listing paths that
//! match a glob and checking whether a path exists.

use std::path::{Path, PathBuf};

/// Filesystem abstraction used during directive expansion
///
/// Implementations handle glob expansion against a real or fake tree.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Expand an absolute glob pattern into matching paths
    ///
    /// Order is unspecified; callers sort the result. Any fault reading the
    /// tree is returned as an error and aborts the invocation.
    fn glob(&self, pattern: &str) -> anyhow::Result<Vec<PathBuf>>;

    /// Check whether a path exists
    fn exists(&self, path: &Path) -> bool;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn glob(&self, pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
        (**self).glob(pattern)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
