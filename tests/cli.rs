mod common;

use assert_cmd::Command;
use common::{create_fixture, manifest_with};
use predicates::prelude::*;
use std::fs;

fn deploygen() -> Command {
    Command::cargo_bin("deploygen").unwrap()
}

#[test]
fn help_mentions_the_main_flags() {
    deploygen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--out-dir"))
        .stdout(predicate::str::contains("--edition"))
        .stdout(predicate::str::contains("--prelude"));
}

#[test]
fn missing_manifest_fails_with_a_prefixed_error() {
    let tmp = create_fixture(&[]);
    deploygen()
        .current_dir(tmp.path())
        .arg("absent.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("deploygen:"));
}

#[test]
fn generates_files_into_the_output_directory() {
    let tmp = create_fixture(&["assets/logo.png"]);
    fs::write(tmp.path().join("deploy.xml"), manifest_with(&["assets/*.png"])).unwrap();

    deploygen().current_dir(tmp.path()).assert().success();

    let scopes = fs::read_to_string(tmp.path().join("generated/project_files.rs")).unwrap();
    let segments = fs::read_to_string(tmp.path().join("generated/project_paths.rs")).unwrap();
    assert!(scopes.contains("pub const Assets: scopes::AssetsType"));
    assert!(segments.contains("PathNode::lit(\"assets\")"));
    assert!(!tmp.path().join("generated/prelude.rs").exists());
}

#[test]
fn prelude_flag_writes_a_third_file() {
    let tmp = create_fixture(&["a.txt"]);
    fs::write(tmp.path().join("deploy.xml"), manifest_with(&["a.txt"])).unwrap();

    deploygen()
        .current_dir(tmp.path())
        .arg("--prelude")
        .assert()
        .success();

    let prelude = fs::read_to_string(tmp.path().join("generated/prelude.rs")).unwrap();
    assert_eq!(prelude, "pub use self::project_files::*;\n");
}

#[test]
fn stdout_mode_prints_instead_of_writing() {
    let tmp = create_fixture(&["a.txt"]);
    fs::write(tmp.path().join("deploy.xml"), manifest_with(&["a.txt"])).unwrap();

    deploygen()
        .current_dir(tmp.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("pub mod project_files"))
        .stdout(predicate::str::contains("pub mod project_paths"));

    assert!(!tmp.path().join("generated").exists());
}

#[test]
fn reserved_conflict_warns_but_generation_succeeds() {
    let tmp = create_fixture(&["ProjectFile.txt", "ok.txt"]);
    fs::write(tmp.path().join("deploy.xml"), manifest_with(&["*.txt"])).unwrap();

    deploygen()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("warning DEPLOY001"));

    let scopes = fs::read_to_string(tmp.path().join("generated/project_files.rs")).unwrap();
    assert!(scopes.contains("Ok_txt"));
    assert!(!scopes.contains("ProjectFile.txt"));
}

#[test]
fn old_edition_is_a_hard_failure_with_no_output() {
    let tmp = create_fixture(&["a.txt"]);
    fs::write(tmp.path().join("deploy.xml"), manifest_with(&["a.txt"])).unwrap();

    deploygen()
        .current_dir(tmp.path())
        .args(["--edition", "2018"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error DEPLOY003"));

    assert!(!tmp.path().join("generated/project_files.rs").exists());
}

#[test]
fn unknown_edition_is_rejected() {
    let tmp = create_fixture(&["a.txt"]);
    fs::write(tmp.path().join("deploy.xml"), manifest_with(&["a.txt"])).unwrap();

    deploygen()
        .current_dir(tmp.path())
        .args(["--edition", "1999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("edition"));
}

#[test]
fn base_dir_overrides_the_manifest_directory() {
    let tmp = create_fixture(&["cfg/deploy.xml", "data/assets/x.txt"]);
    fs::write(
        tmp.path().join("cfg/deploy.xml"),
        manifest_with(&["assets/*.txt"]),
    )
    .unwrap();

    deploygen()
        .current_dir(tmp.path())
        .args(["cfg/deploy.xml", "--base-dir", "data", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("assets/x.txt"));
}
