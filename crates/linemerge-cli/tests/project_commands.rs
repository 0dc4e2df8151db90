use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn test_build_merges_configured_sources() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".linemerge/config.toml")
        .write_str(
            r#"
[merge]
sources = ["templates/base", "templates/node"]

[output]
path = ".gitignore"
"#,
        )
        .unwrap();
    temp.child("templates/base").write_str(".DS_Store\n# logs\n*.log\n").unwrap();
    temp.child("templates/node").write_str("# logs\n*.log\nnode_modules/\n").unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .success();

    let content = std::fs::read_to_string(temp.child(".gitignore").path()).unwrap();
    insta::assert_snapshot!(content, @r"
    .DS_Store

    # logs
    *.log
    node_modules/
    ");
}

#[test]
fn test_build_dry_run_writes_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".linemerge/config.toml")
        .write_str("[merge]\nsources = [\"a\"]\n\n[output]\npath = \"out\"\n")
        .unwrap();
    temp.child("a").write_str("x\n").unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["build", "--dry-run"])
        .assert()
        .success()
        .stdout("x\n");

    temp.child("out").assert(predicate::path::missing());
}

#[test]
fn test_build_without_config_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project config not found"));
}

#[test]
fn test_lint_reports_dangling_comments() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a").write_str("x\n# trailing\n").unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["lint", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dangling-comment"));
}

#[test]
fn test_lint_missing_file_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["lint", "missing"])
        .assert()
        .failure();
}

#[test]
fn test_gitignore_appends_new_patterns() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".gitignore").write_str("target/\n").unwrap();
    temp.child("extra").write_str("target/\n# editors\n.vscode/\n").unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["gitignore", "extra"])
        .assert()
        .success()
        .stderr(predicate::str::contains(".vscode/"));

    temp.child(".gitignore").assert("target/\n\n# editors\n.vscode/\n");
}

#[test]
fn test_gitignore_keeps_trailing_comment_and_blank_lines() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".gitignore").write_str("a\n\nb\n\nc\n# keep me\n").unwrap();
    temp.child("extra").write_str("b\nd\n").unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["gitignore", "extra"])
        .assert()
        .success();

    temp.child(".gitignore").assert("a\n\nb\n\nc\n# keep me\n\nd\n");
}
