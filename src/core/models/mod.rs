//! Domain models for glob expansion
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Directive`] - One wildcard `@import`/`@use`/`@include` line
//! - [`NamespaceStrategy`] - How `@use` lines are aliased
//! - [`IgnoreSet`] - Paths excluded from expansion
//! - [`expand_braces`] - `{a,b}` alternation shared by globbing and ignores
//! - [`Warning`] - Non-fatal diagnostics

mod braces;
mod directive;
mod ignore;
mod namespace;
mod warning;

pub use braces::expand_braces;
pub use directive::{Directive, DirectiveKind, Span, Syntax};
pub use ignore::{IgnoreSet, InvalidIgnorePattern, MATCH_OPTIONS};
pub use namespace::{NamespaceFn, NamespaceStrategy};
pub use warning::Warning;

/// Rules applied to every directive within one invocation
#[derive(Debug, Clone, Default)]
pub struct ExpansionRules {
    /// Namespace strategy for `@use`
    pub namespace: NamespaceStrategy,
    /// Compiled ignore patterns
    pub ignore: IgnoreSet,
}
