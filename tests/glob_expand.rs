mod common;

use common::create_fixture;
use deploygen::expand::{expand_pattern, expand_patterns, normalize_separators};

#[test]
fn literal_pattern_probes_existence() {
    let tmp = create_fixture(&["config.json", "data/settings.toml"]);
    let hits = expand_pattern("config.json", tmp.path()).unwrap();
    assert_eq!(hits, vec!["config.json"]);

    let misses = expand_pattern("missing.json", tmp.path()).unwrap();
    assert!(misses.is_empty());
}

#[test]
fn literal_pattern_matches_nested_file() {
    let tmp = create_fixture(&["data/settings.toml"]);
    let hits = expand_pattern("data/settings.toml", tmp.path()).unwrap();
    assert_eq!(hits, vec!["data/settings.toml"]);
}

#[test]
fn single_star_is_not_recursive() {
    let tmp = create_fixture(&["a.txt", "b.txt", "nested/c.txt"]);
    let hits = expand_pattern("*.txt", tmp.path()).unwrap();
    assert_eq!(hits, vec!["a.txt", "b.txt"]);
}

#[test]
fn wildcard_in_subdirectory() {
    let tmp = create_fixture(&["assets/logo.png", "assets/icon.png", "assets/readme.md"]);
    let hits = expand_pattern("assets/*.png", tmp.path()).unwrap();
    assert_eq!(hits, vec!["assets/icon.png", "assets/logo.png"]);
}

#[test]
fn double_star_descends_under_prefix() {
    let tmp = create_fixture(&[
        "Assets/logo.png",
        "Assets/Icons/app.ico",
        "Assets/Icons/Small/tray.ico",
        "other/skip.png",
    ]);
    let hits = expand_pattern("Assets/**/*.*", tmp.path()).unwrap();
    assert_eq!(
        hits,
        vec![
            "Assets/Icons/Small/tray.ico",
            "Assets/Icons/app.ico",
            "Assets/logo.png",
        ]
    );
}

#[test]
fn bare_double_star_matches_everything() {
    let tmp = create_fixture(&["a.txt", "sub/b.txt", "sub/deep/c"]);
    let hits = expand_pattern("**", tmp.path()).unwrap();
    assert_eq!(hits, vec!["a.txt", "sub/b.txt", "sub/deep/c"]);
}

#[test]
fn star_dot_star_requires_an_extension() {
    let tmp = create_fixture(&["sub/with.ext", "sub/bare"]);
    let hits = expand_pattern("sub/**/*.*", tmp.path()).unwrap();
    assert_eq!(hits, vec!["sub/with.ext"]);
}

#[test]
fn missing_search_directory_is_empty_not_an_error() {
    let tmp = create_fixture(&["a.txt"]);
    assert!(expand_pattern("nope/*.txt", tmp.path()).unwrap().is_empty());
    assert!(expand_pattern("nope/**/*.cfg", tmp.path()).unwrap().is_empty());
}

#[test]
fn directories_never_match() {
    let tmp = create_fixture(&["data/", "data.txt"]);
    let hits = expand_pattern("*", tmp.path()).unwrap();
    assert_eq!(hits, vec!["data.txt"]);
}

#[test]
fn backslash_separators_are_normalized() {
    let tmp = create_fixture(&["assets/logo.png"]);
    let hits = expand_pattern("assets\\*.png", tmp.path()).unwrap();
    assert_eq!(hits, vec!["assets/logo.png"]);

    assert_eq!(normalize_separators("a\\b\\c/"), "a/b/c");
}

#[test]
fn union_is_sorted_and_deduplicated() {
    let tmp = create_fixture(&["b.txt", "a.txt"]);
    let patterns = vec!["*.txt".to_string(), "a.txt".to_string()];
    let hits = expand_patterns(&patterns, tmp.path()).unwrap();
    assert_eq!(hits, vec!["a.txt", "b.txt"]);
}
