//! Namespace strategy for expanded `@use` directives

use std::fmt;
use std::sync::Arc;

/// Callback computing a namespace from `(relative_path, index)`
///
/// `index` is the position of the file in the sorted glob result, before
/// extension and ignore filtering. An empty return value means "no alias".
pub type NamespaceFn = Arc<dyn Fn(&str, usize) -> String + Send + Sync>;

/// How `@use` lines get their ` as <name>` suffix
#[derive(Clone, Default)]
pub enum NamespaceStrategy {
    /// Never append an alias
    #[default]
    None,
    /// Always append this alias verbatim (typically `*`)
    Literal(String),
    /// Derive the alias from the file's directories and partial name
    Derived,
    /// Ask a caller-supplied function
    Custom(NamespaceFn),
}

impl NamespaceStrategy {
    /// Wrap a closure as a custom strategy
    #[must_use]
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str, usize) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Map the boolean flag form: `true` derives names, `false` disables them
    #[must_use]
    pub const fn from_flag(enabled: bool) -> Self {
        if enabled { Self::Derived } else { Self::None }
    }

    /// Whether this strategy never produces an alias
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Debug for NamespaceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Literal(name) => f.debug_tuple("Literal").field(name).finish(),
            Self::Derived => f.write_str("Derived"),
            Self::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

impl From<&str> for NamespaceStrategy {
    fn from(name: &str) -> Self {
        Self::Literal(name.to_string())
    }
}

impl From<bool> for NamespaceStrategy {
    fn from(enabled: bool) -> Self {
        Self::from_flag(enabled)
    }
}
