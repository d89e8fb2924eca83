//! Brace alternation in glob patterns
//!
//! The `glob` crate has no `{a,b}` syntax, so patterns are expanded into
//! their alternatives before they are compiled or matched.

/// Expand every `{a,b,...}` group into separate patterns
///
/// Groups nest, and alternatives keep their left-to-right order. A brace
/// pair without a top-level comma, or one that is never closed, stays
/// literal.
///
/// # Examples
///
/// ```
/// use sass_glob_import::core::models::expand_braces;
///
/// assert_eq!(expand_braces("files/_{a,b}*.scss"), vec!["files/_a*.scss", "files/_b*.scss"]);
/// assert_eq!(expand_braces("{x,y{1,2}}/*.scss"), vec!["x/*.scss", "y1/*.scss", "y2/*.scss"]);
/// assert_eq!(expand_braces("plain/{a}/*.scss"), vec!["plain/{a}/*.scss"]);
/// ```
#[must_use]
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(group) = first_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let head = &pattern[..group.open];
    let tail = &pattern[group.close + 1..];
    let mut bounds = Vec::with_capacity(group.commas.len() + 2);
    bounds.push(group.open);
    bounds.extend(&group.commas);
    bounds.push(group.close);

    bounds
        .windows(2)
        .flat_map(|w| expand_braces(&format!("{head}{}{tail}", &pattern[w[0] + 1..w[1]])))
        .collect()
}

/// Byte offsets of one expandable brace group
struct Group {
    open: usize,
    close: usize,
    commas: Vec<usize>,
}

/// The leftmost closed brace group with at least one top-level comma
fn first_group(pattern: &str) -> Option<Group> {
    let bytes = pattern.as_bytes();
    for (open, _) in pattern.match_indices('{') {
        let mut depth = 0usize;
        let mut commas = Vec::new();
        for (i, &b) in bytes.iter().enumerate().skip(open + 1) {
            match b {
                b'{' => depth += 1,
                b'}' if depth == 0 => {
                    if !commas.is_empty() {
                        return Some(Group {
                            open,
                            close: i,
                            commas,
                        });
                    }
                    break;
                },
                b'}' => depth -= 1,
                b',' if depth == 0 => commas.push(i),
                _ => {},
            }
        }
    }
    None
}
