//! Directive scanner
//!
//! Finds every line whose `@import`, `@use` or `@include` path contains a
//! `*`. The grammar is line-oriented:
//!
//! ```text
//! directive-line := [prefix] "@" keyword WS ["meta.load-css("] quote path quote [")"] [";"] [suffix]
//! prefix         := [ \t]* ["/*" ... "*/"]
//! suffix         := [ \t]* ["//" ... | "/*" ...]
//! ```
//!
//! Directives without a wildcard never match and pass through untouched.
//! The `meta.load-css(` wrapper is only recognised after `@include`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::models::{Directive, DirectiveKind, Span, Syntax};

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?mR)^(?P<prefix>[ \t]*(?:/\*.*\*/)?)"#,
        r#"@(?P<keyword>import|use|include)\s+"#,
        r#"(?P<load_css>meta\.load-css\()?"#,
        r#"["'](?P<pattern>[^"']+\*[^"']*(?:\.scss|\.sass)?)["']"#,
        r#"\)?;?(?P<suffix>[ \t]*(?:/[/*].*)?)$"#,
    ))
    .expect("directive pattern is valid")
});

/// Find all wildcard directives in `source`, in source order
///
/// # Examples
///
/// ```
/// use sass_glob_import::core::models::DirectiveKind;
/// use sass_glob_import::core::services::scan_directives;
///
/// let found = scan_directives("body {}\n@use \"./files/*.scss\";\n@use \"plain\";\n");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].kind, DirectiveKind::Use);
/// assert_eq!(found[0].pattern, "./files/*.scss");
/// assert_eq!(found[0].line, 2);
/// ```
#[must_use]
pub fn scan_directives(source: &str) -> Vec<Directive> {
    DIRECTIVE.captures_iter(source).filter_map(|caps| to_directive(source, &caps)).collect()
}

fn to_directive(source: &str, caps: &Captures<'_>) -> Option<Directive> {
    let whole = caps.get(0)?;
    let text = |name: &str| caps.name(name).map_or("", |m| m.as_str()).to_string();

    let syntax = if whole.as_str().to_ascii_lowercase().contains(".sass") {
        Syntax::Sass
    } else {
        Syntax::Scss
    };

    let kind: DirectiveKind = caps.name("keyword")?.as_str().parse().ok()?;
    let load_css = caps.name("load_css").is_some();
    if load_css && kind != DirectiveKind::Include {
        return None;
    }

    Some(Directive {
        span: Span::new(whole.start(), whole.end()),
        line: source[..whole.start()].matches('\n').count() + 1,
        prefix: text("prefix"),
        kind,
        load_css,
        pattern: text("pattern"),
        suffix: text("suffix"),
        syntax,
    })
}

/// Whether `source` still contains a directive this crate would expand
#[must_use]
pub fn has_wildcard_directive(source: &str) -> bool {
    DIRECTIVE
        .captures_iter(source)
        .any(|caps| to_directive(source, &caps).is_some())
}
