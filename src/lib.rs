//! sass-glob-import - Expand wildcard imports in Sass stylesheets
//!
//! Rewrites stylesheet source before it reaches the Sass compiler: every
//! `@import`, `@use` or `@include meta.load-css(...)` whose path contains a
//! `*` is replaced by one directive per matching file on disk.
//!
//! ```no_run
//! use sass_glob_import::loader::{LoaderOptions, transform};
//!
//! let out = transform("@import \"./partials/*.scss\";", "styles", &LoaderOptions::default())?;
//! # Ok::<(), sass_glob_import::loader::LoaderError>(())
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod loader;
pub mod output;

pub use loader::{Loader, LoaderError, LoaderOptions, Transformed, transform};
