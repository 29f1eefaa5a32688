//! Init command specs.

use crate::prelude::*;

#[test]
fn init_writes_config_and_patterns() {
    let tmp = tempfile::TempDir::new().expect("tempdir");

    kibitz_cmd()
        .arg("init")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("created kibitz.toml"));

    assert!(tmp.path().join("kibitz.toml").exists());
    assert!(tmp.path().join("patterns/base.yaml").exists());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let tmp = tempfile::TempDir::new().expect("tempdir");

    kibitz_cmd().arg("init").current_dir(tmp.path()).assert().success();
    kibitz_cmd()
        .arg("init")
        .current_dir(tmp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"));

    kibitz_cmd()
        .args(["init", "--force"])
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[test]
fn generated_files_support_a_real_scan() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    kibitz_cmd().arg("init").current_dir(tmp.path()).assert().success();

    std::fs::write(tmp.path().join("app.py"), "import random\n").expect("write target");

    kibitz_cmd()
        .arg("scan")
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("app.py:1: [warning] import random"));
}
