use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn test_merge_prints_to_stdout() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.gitignore").write_str("target/\n# logs\n*.log\n").unwrap();
    temp.child("b.gitignore").write_str("*.log\r\n# editors\r\n.idea/\r\n").unwrap();

    let output = Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["merge", "a.gitignore", "b.gitignore"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "target/\n\n# logs\n*.log\n\n# editors\n.idea/\n");
}

#[test]
fn test_merge_writes_out_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a").write_str("# top\nx\n").unwrap();
    temp.child("b").write_str("y\nx\n").unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["merge", "a", "b", "--out", "merged.txt", "--no-leading-blank", "--stats"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Collapsed"));

    temp.child("merged.txt").assert("# top\nx\ny\n");
}

#[test]
fn test_merge_refuses_to_overwrite_without_force() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a").write_str("x\n").unwrap();
    temp.child("merged.txt").write_str("keep\n").unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .env("LINEMERGE_NO_PROMPT", "1")
        .args(["merge", "a", "--out", "merged.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    temp.child("merged.txt").assert("keep\n");

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["merge", "a", "--out", "merged.txt", "--force"])
        .assert()
        .success();

    temp.child("merged.txt").assert("x\n");
}

#[test]
fn test_merge_missing_file_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["merge", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn test_tokenize_prints_json() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a").write_str("# c\nx\ny\n# dropped\n").unwrap();

    let output = Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["tokenize", "a"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "line": "x", "comments": ["# c"] }, { "line": "y" }])
    );
}

#[test]
fn test_merge_raw_combines_token_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("one.json")
        .write_str(r##"[{ "line": "thing", "comments": ["# thing comment 1"] }]"##)
        .unwrap();
    temp.child("two.json")
        .write_str(r##"[{ "line": "thing", "comments": ["# thing comment 2"] }, { "line": "stuff" }]"##)
        .unwrap();

    let output = Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["merge-raw", "one.json", "two.json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "line": "thing", "comments": ["# thing comment 1", "# thing comment 2"] },
            { "line": "stuff" }
        ])
    );
}

#[test]
fn test_merge_raw_rejects_non_array() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("bad.json").write_str(r#""not-an-array""#).unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["merge-raw", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn test_serialize_rejects_tokens_without_line() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("bad.json").write_str(r#"[{ "notline": 1 }]"#).unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["serialize", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn test_serialize_renders_tokens() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("t.json")
        .write_str(r##"[{ "line": "a" }, { "line": "b", "comments": ["# c"] }]"##)
        .unwrap();

    Command::cargo_bin("linemerge")
        .unwrap()
        .current_dir(temp.path())
        .args(["serialize", "t.json"])
        .assert()
        .success()
        .stdout("a\n\n# c\nb\n");
}
