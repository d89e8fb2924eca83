//! Lexical path handling for glob expansion
//!
//! All separator conversion happens here, so no other module needs to care
//! whether the host uses `/` or `\`. Nothing in this module touches the
//! filesystem.

use std::path::{Component, Path, PathBuf, is_separator};

use glob::Pattern;

/// Normalize a relative path for emission in a directive
///
/// Backslashes become forward slashes and a single leading slash is
/// stripped.
///
/// # Examples
///
/// ```
/// use sass_glob_import::core::services::normalize_relative;
///
/// assert_eq!(normalize_relative(r"files\_a.scss"), "files/_a.scss");
/// assert_eq!(normalize_relative("/files/_a.scss"), "files/_a.scss");
/// ```
#[must_use]
pub fn normalize_relative(path: &str) -> String {
    let forward = path.replace('\\', "/");
    forward.strip_prefix('/').map_or_else(|| forward.clone(), str::to_string)
}

/// Collapse `.` and `..` components without consulting the filesystem
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Join a `/`-separated relative path onto `base`, lexically
#[must_use]
pub fn join_lexical(base: &Path, relative: &str) -> PathBuf {
    let mut joined = base.to_path_buf();
    for segment in relative.split(is_separator).filter(|s| !s.is_empty()) {
        joined.push(segment);
    }
    clean(&joined)
}

/// Compute `target` relative to `base`, lexically
///
/// Both paths are cleaned first. Components of `base` not shared with
/// `target` turn into `..`.
#[must_use]
pub fn relative_to(base: &Path, target: &Path) -> PathBuf {
    let base = clean(base);
    let target = clean(target);

    let base_parts: Vec<Component<'_>> = base.components().collect();
    let target_parts: Vec<Component<'_>> = target.components().collect();
    let shared = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in shared..base_parts.len() {
        out.push("..");
    }
    for part in &target_parts[shared..] {
        out.push(part.as_os_str());
    }
    out
}

/// Build the absolute glob pattern for `pattern` under `base`
///
/// `.` segments are dropped and `..` segments are resolved against the
/// pattern first, then against `base`. The `base` portion is escaped so
/// metacharacters in directory names match literally.
#[must_use]
pub fn glob_under(base: &Path, pattern: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let mut climb = 0usize;
    for segment in pattern.split(is_separator) {
        match segment {
            "" | "." => {},
            ".." => {
                if segments.pop().is_none() {
                    climb += 1;
                }
            },
            other => segments.push(other),
        }
    }
    let segments: Vec<String> = segments.into_iter().map(sanitize_segment).collect();

    let mut root = clean(base);
    for _ in 0..climb {
        if !root.pop() {
            break;
        }
    }

    let root = root.to_string_lossy().replace('\\', "/");
    let escaped = Pattern::escape(root.trim_end_matches('/'));
    format!("{escaped}/{}", segments.join("/"))
}

/// Rewrite one pattern segment into syntax the `glob` crate accepts
///
/// `**` only spans directories as a whole segment; anywhere else a run of
/// stars collapses to `*`. A `[` with no closing `]` matches itself.
fn sanitize_segment(segment: &str) -> String {
    if segment == "**" {
        return segment.to_string();
    }

    let chars: Vec<char> = segment.chars().collect();
    let mut out = String::with_capacity(segment.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            },
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                },
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Index of the `]` closing a character class opened at `start`
///
/// The first member (after an optional `!`) may itself be `]`.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let first = if chars.get(start + 1) == Some(&'!') { start + 2 } else { start + 1 };
    (first + 1..chars.len()).find(|&j| chars[j] == ']')
}

/// The fixed directory named in front of a pattern's first `*`
///
/// Returns `None` when the pattern starts with a wildcard or names no
/// directory before it (e.g. `_*.scss`).
///
/// # Examples
///
/// ```
/// use sass_glob_import::core::services::fixed_directory;
///
/// assert_eq!(fixed_directory("foo/**/*.scss"), Some("foo/"));
/// assert_eq!(fixed_directory("./files/_*.scss"), Some("./files/"));
/// assert_eq!(fixed_directory("*.scss"), None);
/// ```
#[must_use]
pub fn fixed_directory(pattern: &str) -> Option<&str> {
    let prefix = pattern.split('*').next().unwrap_or_default();
    let end = prefix.rfind(is_separator)?;
    let dir = &prefix[..=end];
    (!dir.is_empty()).then_some(dir)
}

/// Whether a path ends in a stylesheet extension (`.scss`/`.sass`, any case)
#[must_use]
pub fn has_stylesheet_extension(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".scss") || lower.ends_with(".sass")
}
