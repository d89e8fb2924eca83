//! Expansion services
//!
//! Pure orchestration logic over domain models. Filesystem access goes
//! through the [`FileSystem`](crate::core::ports::FileSystem) port only.
//!
//! - [`scanner`] - Find wildcard directives in source text
//! - [`resolver`] - Expand one directive into replacement text
//! - [`rewriter`] - Drive scanning, resolution and splicing
//! - [`synthesizer`] - Format directive lines
//! - [`naming`] - Namespace selection for `@use`
//! - [`paths`] - Lexical path normalization
//! - [`collate`] - Locale-aware path ordering

pub mod collate;
pub mod naming;
pub mod paths;
pub mod resolver;
pub mod rewriter;
pub mod scanner;
pub mod synthesizer;

pub use collate::locale_cmp;
pub use naming::{derive_namespace, namespace_for};
pub use paths::{fixed_directory, glob_under, has_stylesheet_extension, normalize_relative};
pub use resolver::{Expansion, ResolveError, resolve_directive};
pub use rewriter::{Rewrite, rewrite};
pub use scanner::{has_wildcard_directive, scan_directives};
pub use synthesizer::{assemble, synthesize_line};
