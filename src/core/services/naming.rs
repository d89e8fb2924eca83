//! Namespace selection for expanded `@use` lines

use crate::core::models::NamespaceStrategy;

/// Pick the namespace for one resolved file, if any
///
/// * `path` - normalized path relative to the resolving directory
/// * `index` - position of the file in the sorted, unfiltered glob result
#[must_use]
pub fn namespace_for(strategy: &NamespaceStrategy, path: &str, index: usize) -> Option<String> {
    match strategy {
        NamespaceStrategy::None => None,
        NamespaceStrategy::Literal(name) => Some(name.clone()),
        NamespaceStrategy::Derived => Some(derive_namespace(path)).filter(|n| !n.is_empty()),
        NamespaceStrategy::Custom(f) => Some(f(path, index)).filter(|n| !n.is_empty()),
    }
}

/// Derive a namespace from a relative stylesheet path
///
/// Directory segments (minus `..`) are joined with the file's bare name
/// using hyphens. The bare name loses its extension and every underscore.
///
/// # Examples
///
/// ```
/// use sass_glob_import::core::services::derive_namespace;
///
/// assert_eq!(derive_namespace("components/_button.scss"), "components-button");
/// assert_eq!(derive_namespace("../shared/_grid_base.scss"), "shared-gridbase");
/// assert_eq!(derive_namespace("_theme.scss"), "theme");
/// ```
#[must_use]
pub fn derive_namespace(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').collect();
    let file = segments.pop().unwrap_or_default();

    let stem = [".scss", "_scss", ".sass", "_sass"]
        .iter()
        .find_map(|ext| file.strip_suffix(ext))
        .unwrap_or(file)
        .replace('_', "");

    let mut parts: Vec<&str> = segments.into_iter().filter(|s| *s != "..").collect();
    parts.push(stem.as_str());
    parts.join("-")
}
