//! Loader entry point
//!
//! A [`Loader`] holds the compiled configuration and a filesystem, and
//! transforms stylesheet sources one at a time. Each call is independent;
//! nothing is cached between invocations.
//!
//! # Examples
//!
//! ```no_run
//! use sass_glob_import::loader::{Loader, LoaderOptions};
//!
//! let loader = Loader::new(LoaderOptions::default().with_namespace("*")).unwrap();
//! let out = loader.transform("@use \"./components/*.scss\";", "styles").unwrap();
//! print!("{}", out.text);
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::adapters::fs::StdFileSystem;
use crate::core::models::{ExpansionRules, IgnoreSet, InvalidIgnorePattern, NamespaceStrategy, Warning};
use crate::core::ports::FileSystem;
use crate::core::services::{Expansion, ResolveError, rewrite};

/// Errors that abort a transformation
#[derive(Debug, Error)]
pub enum LoaderError {
    /// An ignore pattern could not be compiled
    #[error(transparent)]
    InvalidIgnorePattern(#[from] InvalidIgnorePattern),

    /// Resolution failed on a filesystem fault
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The resolving directory could not be made absolute
    #[error("cannot resolve directory {path}: {source}")]
    Directory {
        /// The directory as supplied
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The resource path has no parent directory
    #[error("resource has no parent directory: {0}")]
    NoParent(PathBuf),
}

/// User-facing configuration for a [`Loader`]
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Namespace strategy for `@use` lines
    pub namespace: NamespaceStrategy,
    /// Glob patterns (relative to the resolving directory) to leave out
    pub ignore_paths: Vec<String>,
}

impl LoaderOptions {
    /// Set the namespace strategy
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<NamespaceStrategy>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the ignore patterns
    #[must_use]
    pub fn with_ignore_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Compile into rules, validating ignore patterns
    pub fn compile(&self) -> Result<ExpansionRules, InvalidIgnorePattern> {
        Ok(ExpansionRules {
            namespace: self.namespace.clone(),
            ignore: IgnoreSet::new(&self.ignore_paths)?,
        })
    }
}

/// Result of transforming one source
#[derive(Debug, Clone)]
pub struct Transformed {
    /// The rewritten source text
    pub text: String,
    /// Warnings raised, one per affected directive
    pub warnings: Vec<Warning>,
    /// Per-directive details, in source order
    pub expansions: Vec<Expansion>,
}

/// Stylesheet transformer bound to a configuration and filesystem
#[derive(Debug)]
pub struct Loader<F = StdFileSystem> {
    rules: ExpansionRules,
    fs: F,
}

impl Loader<StdFileSystem> {
    /// Create a loader over the host filesystem
    pub fn new(options: LoaderOptions) -> Result<Self, LoaderError> {
        Self::with_file_system(options, StdFileSystem)
    }
}

impl<F: FileSystem> Loader<F> {
    /// Create a loader over a custom filesystem
    pub fn with_file_system(options: LoaderOptions, fs: F) -> Result<Self, LoaderError> {
        Ok(Self {
            rules: options.compile()?,
            fs,
        })
    }

    /// Transform `source`, resolving globs relative to `dir`
    ///
    /// `dir` is made absolute against the current working directory first.
    pub fn transform(&self, source: &str, dir: impl AsRef<Path>) -> Result<Transformed, LoaderError> {
        let dir = dir.as_ref();
        let base = std::path::absolute(dir).map_err(|source| LoaderError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;

        let rewritten = rewrite(source, &base, &self.rules, &self.fs)?;
        let warnings = rewritten
            .expansions
            .iter()
            .filter_map(|e| e.warning.clone())
            .collect();

        Ok(Transformed {
            text: rewritten.text,
            warnings,
            expansions: rewritten.expansions,
        })
    }

    /// Transform the source of the stylesheet at `resource_path`
    ///
    /// Globs resolve relative to the stylesheet's own directory.
    pub fn transform_resource(
        &self,
        source: &str,
        resource_path: impl AsRef<Path>,
    ) -> Result<Transformed, LoaderError> {
        let resource_path = resource_path.as_ref();
        let dir = resource_dir(resource_path)?;
        self.transform(source, dir)
    }

    /// Callback-style entry point for asynchronous hosts
    ///
    /// The work runs synchronously; `callback` receives the transformed text
    /// or the fault exactly once before this returns.
    pub fn process<C>(&self, source: &str, resource_path: impl AsRef<Path>, callback: C)
    where
        C: FnOnce(Result<String, LoaderError>),
    {
        callback(self.transform_resource(source, resource_path).map(|t| t.text));
    }
}

/// Directory a resource's globs resolve against
pub fn resource_dir(resource_path: &Path) -> Result<&Path, LoaderError> {
    match resource_path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Ok(Path::new(".")),
        Some(parent) => Ok(parent),
        None => Err(LoaderError::NoParent(resource_path.to_path_buf())),
    }
}

/// One-shot transform over the host filesystem
///
/// # Examples
///
/// ```no_run
/// use sass_glob_import::loader::{LoaderOptions, transform};
///
/// let css = transform("@import \"./partials/*.scss\";", "styles", &LoaderOptions::default())?;
/// # Ok::<(), sass_glob_import::loader::LoaderError>(())
/// ```
pub fn transform(
    source: &str,
    dir: impl AsRef<Path>,
    options: &LoaderOptions,
) -> Result<String, LoaderError> {
    let loader = Loader::new(options.clone())?;
    Ok(loader.transform(source, dir)?.text)
}
