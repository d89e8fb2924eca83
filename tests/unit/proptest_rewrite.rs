//! Property-based tests for the rewriter
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::path::Path;

use proptest::prelude::*;
use sass_glob_import::core::models::{ExpansionRules, IgnoreSet};
use sass_glob_import::core::services::{
    has_wildcard_directive, locale_cmp, normalize_relative, rewrite, scan_directives,
};
use sass_glob_import::loader::{Loader, LoaderOptions};

use crate::common::{StaticFs, TestTree};

proptest! {
    /// Text without any `*` is a fixed point
    #[test]
    fn text_without_wildcards_is_unchanged(source in "[a-z@\"'; {}:/\\.\\n\\t-]{0,200}") {
        let fs = StaticFs::new(&["/t/x/_a.scss"], true);
        let out = rewrite(&source, Path::new("/t"), &ExpansionRules::default(), &fs).unwrap();
        prop_assert_eq!(out.text, source);
        prop_assert!(out.expansions.is_empty());
    }

    /// The quick wildcard check agrees with a full scan
    #[test]
    fn wildcard_check_agrees_with_scan(
        source in "(@(use|include|import) (meta\\.load-css\\()?\"[a-z/]{0,4}\\*?[a-z.]{0,5}\"\\)?;?\n){0,4}"
    ) {
        prop_assert_eq!(has_wildcard_directive(&source), !scan_directives(&source).is_empty());
    }

    /// Normalized paths use forward slashes and never start with one
    #[test]
    fn normalized_paths_are_forward_relative(path in "[a-z_/\\\\]{1,40}") {
        let normalized = normalize_relative(&path);
        let forward = path.replace('\\', "/");
        prop_assert!(!normalized.contains('\\'));
        prop_assert_eq!(normalized.starts_with('/'), forward.starts_with("//"));
    }

    /// Collation is antisymmetric and total
    #[test]
    fn locale_cmp_is_antisymmetric(a in "[a-zA-Z0-9_.-]{0,12}", b in "[a-zA-Z0-9_.-]{0,12}") {
        prop_assert_eq!(locale_cmp(&a, &b), locale_cmp(&b, &a).reverse());
        prop_assert_eq!(locale_cmp(&a, &b).is_eq(), a == b);
    }

    /// Every kept file survives the ignore set and every dropped one is caught
    #[test]
    fn ignore_filter_is_exact(names in proptest::collection::btree_set("[a-d]{1,3}", 1..8)) {
        let tree = TestTree::new();
        for name in &names {
            tree.add_file(&format!("pool/_{name}.scss"), "");
        }
        let patterns = ["pool/_a*.scss", "pool/_*c.scss"];
        let ignore = IgnoreSet::new(&patterns).unwrap();

        let loader = Loader::new(LoaderOptions::default().with_ignore_paths(patterns)).unwrap();
        let out = loader.transform("@import \"pool/*.scss\";", tree.path()).unwrap();
        let kept = &out.expansions[0].files;

        for name in &names {
            let path = format!("pool/_{name}.scss");
            prop_assert_eq!(kept.contains(&path), !ignore.is_ignored(&path));
        }
    }
}

#[test]
fn output_is_a_fixed_point() {
    let tree = TestTree::new();
    let loader = Loader::new(LoaderOptions::default().with_namespace(true)).unwrap();
    let source = "@use \"components/**/*.scss\";\n@import \"files/*.scss\";\n";

    let once = loader.transform(source, tree.path()).unwrap().text;
    assert!(!has_wildcard_directive(&once));
    let twice = loader.transform(&once, tree.path()).unwrap().text;
    assert_eq!(once, twice);
}

#[test]
fn repeated_runs_are_identical() {
    let tree = TestTree::new();
    for name in ["zeta", "Alpha", "beta", "_gamma", "10", "2"] {
        tree.add_file(&format!("many/_{name}.scss"), "");
    }
    let loader = Loader::new(LoaderOptions::default()).unwrap();
    let source = "@import \"many/*.scss\";";
    let first = loader.transform(source, tree.path()).unwrap().text;
    for _ in 0..5 {
        assert_eq!(loader.transform(source, tree.path()).unwrap().text, first);
    }
}
