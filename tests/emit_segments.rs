use deploygen::cancel::CancelToken;
use deploygen::segments::emit_segments;
use deploygen::tree::build_file_tree;

fn emit(paths: &[&str]) -> String {
    let paths: Vec<String> = paths.iter().map(|s| s.to_string()).collect();
    let cancel = CancelToken::new();
    let tree = build_file_tree(&paths, &cancel).unwrap();
    emit_segments(&tree, &cancel).unwrap()
}

#[test]
fn empty_input_produces_only_the_path_node_support_type() {
    let out = emit(&[]);
    assert!(out.contains("#[allow(nonstandard_style)]\npub mod project_paths {"));
    assert!(out.contains("pub struct PathNode"));
    assert!(!out.contains("PathNode::lit"));
}

#[test]
fn directory_fragments_hold_the_bare_name() {
    let out = emit(&["assets/icons/app.ico"]);
    assert!(out.contains("pub const Assets: PathNode = PathNode::lit(\"assets\");"));
    assert!(out.contains("pub const Icons: PathNode = PathNode::lit(\"icons\");"));
}

#[test]
fn duplicate_directory_names_collapse_to_one_fragment() {
    let out = emit(&["a/shared/x.txt", "b/shared/y.txt"]);
    assert_eq!(out.matches("PathNode::lit(\"shared\")").count(), 1);
}

#[test]
fn file_stems_group_extensions() {
    let out = emit(&["logo.png", "print/logo.svg"]);
    assert!(out.contains("pub mod Logo {"));
    assert!(out.contains("pub const Png: PathNode = PathNode::lit(\"logo.png\");"));
    assert!(out.contains("pub const Svg: PathNode = PathNode::lit(\"logo.svg\");"));
}

#[test]
fn same_name_in_different_directories_is_one_group() {
    let out = emit(&["a/config.json", "b/config.json"]);
    assert_eq!(out.matches("pub mod Config {").count(), 1);
    assert_eq!(out.matches("PathNode::lit(\"config.json\")").count(), 1);
}

#[test]
fn extensionless_files_produce_no_fragment() {
    let out = emit(&["bin/LICENSE"]);
    assert!(out.contains("PathNode::lit(\"bin\")"));
    assert!(!out.contains("LICENSE"));
}

#[test]
fn dotfiles_count_as_extensionless() {
    let out = emit(&["conf/.gitignore"]);
    assert!(!out.contains("gitignore"));
}

#[test]
fn multi_dot_names_split_at_the_last_dot() {
    let out = emit(&["archive.tar.gz"]);
    assert!(out.contains("pub mod ArchiveTar {"));
    assert!(out.contains("pub const Gz: PathNode = PathNode::lit(\"archive.tar.gz\");"));
}

#[test]
fn all_symbol_directory_names_get_the_escaped_placeholder() {
    let out = emit(&["---/x.txt"]);
    assert!(out.contains("pub const __: PathNode = PathNode::lit(\"---\");"));
    assert!(!out.contains("pub const _:"));
}

#[test]
fn output_is_deterministic() {
    let out1 = emit(&["b/x.txt", "a/y.json"]);
    let out2 = emit(&["a/y.json", "b/x.txt"]);
    assert_eq!(out1, out2);
}

#[test]
fn cancellation_stops_emission() {
    let paths = vec!["a/b.txt".to_string()];
    let cancel = CancelToken::new();
    let tree = build_file_tree(&paths, &cancel).unwrap();
    cancel.cancel();
    assert!(emit_segments(&tree, &cancel).is_err());
}
