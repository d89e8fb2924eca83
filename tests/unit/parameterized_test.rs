//! Parameterized tests using test-case
//!
//! These tests run the same scanning and synthesis logic with different
//! inputs.

use sass_glob_import::core::models::{DirectiveKind, NamespaceStrategy, Syntax};
use sass_glob_import::core::services::{derive_namespace, namespace_for, scan_directives};
use sass_glob_import::loader::{Loader, LoaderOptions};
use test_case::test_case;

use crate::common::StaticFs;

// =============================================================================
// Scanner Tests
// =============================================================================

#[test_case("@import \"a/*.scss\";", DirectiveKind::Import, false ; "import")]
#[test_case("@use \"a/*.scss\";", DirectiveKind::Use, false ; "use")]
#[test_case("@include \"a/*.scss\";", DirectiveKind::Include, false ; "bare include")]
#[test_case("@include meta.load-css(\"a/*.scss\");", DirectiveKind::Include, true ; "load css include")]
#[test_case("@import 'a/**/*';", DirectiveKind::Import, false ; "single quotes no extension")]
fn test_scan_kind(source: &str, kind: DirectiveKind, load_css: bool) {
    let found = scan_directives(source);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, kind);
    assert_eq!(found[0].load_css, load_css);
}

#[test_case("@import \"a/b.scss\";" ; "no wildcard")]
#[test_case("@forward \"a/*.scss\";" ; "unsupported keyword")]
#[test_case("@use meta.load-css(\"a/*.scss\");" ; "load css only for include")]
#[test_case("@import \"a/*.scss\"; .x {}" ; "code after directive")]
#[test_case(".x { @import \"a/*.scss\"; }" ; "code before directive")]
#[test_case("// @import \"a/*.scss\";" ; "line comment prefix")]
fn test_scan_rejects(source: &str) {
    assert!(scan_directives(source).is_empty());
}

#[test_case("@import \"a/*.scss\";", Syntax::Scss ; "scss pattern")]
#[test_case("@import \"a/*.sass\"", Syntax::Sass ; "sass pattern")]
#[test_case("@import \"a/*\"; // from .sass", Syntax::Sass ; "sass mentioned in comment")]
#[test_case("@import \"a/*\";", Syntax::Scss ; "no extension defaults to scss")]
fn test_scan_syntax(source: &str, syntax: Syntax) {
    assert_eq!(scan_directives(source)[0].syntax, syntax);
}

// =============================================================================
// Namespace Tests
// =============================================================================

#[test_case("files/_file-a.scss", "files-file-a" ; "partial in directory")]
#[test_case("_theme.scss", "theme" ; "top level partial")]
#[test_case("a/b/_c_d.scss", "a-b-cd" ; "underscores removed")]
#[test_case("../../x/_y.scss", "x-y" ; "parent segments dropped")]
#[test_case("plain.scss", "plain" ; "non partial")]
fn test_derive_namespace(path: &str, expected: &str) {
    assert_eq!(derive_namespace(path), expected);
}

#[test_case(NamespaceStrategy::None, None ; "none")]
#[test_case(NamespaceStrategy::Literal("*".to_string()), Some("*") ; "literal")]
#[test_case(NamespaceStrategy::Derived, Some("files-a") ; "derived")]
#[test_case(NamespaceStrategy::custom(|_, i| format!("m{i}")), Some("m4") ; "custom")]
#[test_case(NamespaceStrategy::custom(|_, _| String::new()), None ; "custom empty")]
fn test_namespace_precedence(strategy: NamespaceStrategy, expected: Option<&str>) {
    assert_eq!(namespace_for(&strategy, "files/_a.scss", 4).as_deref(), expected);
}

// =============================================================================
// Synthesis Tests
// =============================================================================

#[test_case("@import \"f/*.scss\";", "@import \"f/_a.scss\";" ; "import scss")]
#[test_case("@import \"f/*.sass\"", "@import \"f/_a.sass\"" ; "import sass")]
#[test_case("@use \"f/*.scss\";", "@use \"f/_a.scss\" as *;" ; "use scss")]
#[test_case("@use \"f/*.sass\"", "@use \"f/_a.sass\" as *" ; "use sass")]
#[test_case("@include meta.load-css(\"f/*.scss\");", "@include meta.load-css(\"f/_a.scss\");" ; "load css scss")]
#[test_case("@include meta.load-css(\"f/*.sass\")", "@include meta.load-css(\"f/_a.sass\")" ; "load css sass")]
#[test_case("@include \"f/*.scss\";", "@include \"f/_a.scss\";" ; "bare include")]
fn test_synthesis(source: &str, expected: &str) {
    let ext = if source.contains(".sass") { "sass" } else { "scss" };
    let matched = format!("/t/f/_a.{ext}");
    let fs = StaticFs::new(&[matched.as_str()], true);
    let loader =
        Loader::with_file_system(LoaderOptions::default().with_namespace("*"), fs).unwrap();
    assert_eq!(loader.transform(source, "/t").unwrap().text, expected);
}
