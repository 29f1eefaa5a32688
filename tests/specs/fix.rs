//! Fix command specs.

use crate::prelude::*;
use std::fs;

#[test]
fn fix_rewrites_cleanly_fixable_lines() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    copy_fixture("fixable", tmp.path());

    kibitz_cmd()
        .args(["fix", "src/app.py"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("fixed 1 line across 1 file"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("src/app.py")).expect("fixed file"),
        "import secrets\n"
    );
}

#[test]
fn refixed_file_is_clean_on_rescan() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    copy_fixture("fixable", tmp.path());

    kibitz_cmd()
        .args(["fix", "src/app.py"])
        .current_dir(tmp.path())
        .assert()
        .success();

    kibitz_cmd()
        .args(["scan", "src/app.py"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No suggestions."));
}

#[test]
fn conflicting_rules_leave_the_line_untouched() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    copy_fixture("fixable", tmp.path());
    let original = fs::read_to_string(tmp.path().join("src/conflict.py")).expect("fixture");

    kibitz_cmd()
        .args(["fix", "src/conflict.py"])
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stdout(
            predicates::str::contains("conflict src/conflict.py:2")
                .and(predicates::str::contains(r"`return\s+`"))
                .and(predicates::str::contains(r"`random\.choice`")),
        );

    assert_eq!(
        fs::read_to_string(tmp.path().join("src/conflict.py")).expect("unchanged file"),
        original
    );
}

#[test]
fn dry_run_reports_without_touching_files() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    copy_fixture("fixable", tmp.path());

    kibitz_cmd()
        .args(["fix", "src/app.py", "--dry-run"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("would fix 1 line across 1 file"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("src/app.py")).expect("untouched file"),
        "import random\n"
    );
}

#[test]
fn fix_without_rules_is_a_usage_error() {
    kibitz_cmd()
        .arg("fix")
        .current_dir(fixture("simple"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no fix rules configured"));
}
