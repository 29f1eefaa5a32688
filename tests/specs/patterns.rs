//! Pattern loading specs.

use crate::prelude::*;

#[test]
fn missing_severity_aborts_before_scanning() {
    kibitz_cmd()
        .arg("scan")
        .current_dir(fixture("bad-patterns"))
        .assert()
        .code(2)
        .stderr(
            predicates::str::contains("broken.yaml")
                .and(predicates::str::contains(r"return\s+")),
        );
}

#[test]
fn invalid_expression_aborts_before_scanning() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    let patterns = tmp.path().join("bad.yaml");
    std::fs::write(&patterns, "'[unclosed':\n  severity: info\n").expect("write patterns");

    kibitz_cmd()
        .args(["scan", "--patterns", "bad.yaml"])
        .current_dir(tmp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("does not compile"));
}

#[test]
fn missing_pattern_file_aborts_before_scanning() {
    let tmp = tempfile::TempDir::new().expect("tempdir");

    kibitz_cmd()
        .args(["scan", "--patterns", "absent.yaml"])
        .current_dir(tmp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read pattern set"));
}

#[test]
fn scan_without_patterns_suggests_init() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    std::fs::create_dir(tmp.path().join(".git")).expect("git marker");

    kibitz_cmd()
        .arg("scan")
        .current_dir(tmp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("kibitz init"));
}

#[test]
fn last_loaded_duplicate_definition_wins() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    std::fs::write(tmp.path().join("app.py"), "return value\n").expect("write target");
    std::fs::write(
        tmp.path().join("first.yaml"),
        "'return\\s+':\n  severity: info\n",
    )
    .expect("write first");
    std::fs::write(
        tmp.path().join("second.yaml"),
        "'return\\s+':\n  severity: critical\n",
    )
    .expect("write second");

    kibitz_cmd()
        .args([
            "scan",
            "app.py",
            "--patterns",
            "first.yaml",
            "--patterns",
            "second.yaml",
        ])
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("app.py:1: [critical] return value"));
}
