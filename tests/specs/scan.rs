//! Scan command specs.

use crate::prelude::*;

#[test]
fn scan_reports_matches_and_exits_one() {
    kibitz_cmd()
        .arg("scan")
        .current_dir(fixture("simple"))
        .assert()
        .code(1)
        .stdout(
            predicates::str::contains("src/app.py:2: [warning] import random")
                .and(predicates::str::contains("tags: import, random"))
                .and(predicates::str::contains(
                    "Wrap RNG access behind a seam tests can replace.",
                )),
        );
}

#[test]
fn scan_is_clean_on_an_unmatched_file() {
    kibitz_cmd()
        .args(["scan", "src/clean.py"])
        .current_dir(fixture("simple"))
        .assert()
        .success()
        .stdout(predicates::str::contains("No suggestions."));
}

#[test]
fn severity_threshold_drops_less_severe_records() {
    kibitz_cmd()
        .args(["scan", "--severity", "critical"])
        .current_dir(fixture("simple"))
        .assert()
        .code(1)
        .stdout(
            predicates::str::contains("src/legacy.py:4: [critical]")
                .and(predicates::str::contains("app.py").not()),
        );
}

#[test]
fn tag_filter_retains_only_intersecting_records() {
    kibitz_cmd()
        .args(["scan", "--tag", "random"])
        .current_dir(fixture("simple"))
        .assert()
        .code(1)
        .stdout(
            predicates::str::contains("src/app.py:2")
                .and(predicates::str::contains("legacy.py").not()),
        );
}

#[test]
fn unmatched_tag_filter_yields_a_clean_run() {
    kibitz_cmd()
        .args(["scan", "--tag", "sql"])
        .current_dir(fixture("simple"))
        .assert()
        .success()
        .stdout(predicates::str::contains("No suggestions."));
}

#[test]
fn json_output_nests_file_line_fields() {
    let output = kibitz_cmd()
        .args(["scan", "--output", "json"])
        .current_dir(fixture("simple"))
        .output()
        .expect("command should run");

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    let entry = &value["files"]["src/app.py"]["2"];
    assert_eq!(entry["line"], "import random");
    assert_eq!(entry["severity"], "warning");
    assert_eq!(entry["tags"][0], "import");
    assert_eq!(value["summary"]["matches"], 2);
}

#[test]
fn markdown_output_groups_by_file() {
    kibitz_cmd()
        .args(["scan", "--output", "markdown"])
        .current_dir(fixture("simple"))
        .assert()
        .code(1)
        .stdout(
            predicates::str::contains("# Kibitz Report")
                .and(predicates::str::contains("## src/app.py"))
                .and(predicates::str::contains("### Line 2 (warning)")),
        );
}

#[test]
fn report_can_be_written_to_a_file() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    let out = tmp.path().join("report.json");

    kibitz_cmd()
        .args(["scan", "--output", "json", "--output-file"])
        .arg(&out)
        .current_dir(fixture("simple"))
        .assert()
        .code(1);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).expect("report file"))
            .expect("file should be JSON");
    assert_eq!(value["summary"]["files"], 2);
}

#[test]
fn explicit_pattern_files_override_the_config() {
    // A pattern set with nothing matching the fixture tree.
    let tmp = tempfile::TempDir::new().expect("tempdir");
    let patterns = tmp.path().join("other.yaml");
    std::fs::write(
        &patterns,
        "'never_matches_anything':\n  severity: info\n",
    )
    .expect("write patterns");

    kibitz_cmd()
        .arg("scan")
        .arg("--patterns")
        .arg(&patterns)
        .current_dir(fixture("simple"))
        .assert()
        .success()
        .stdout(predicates::str::contains("No suggestions."));
}

#[test]
fn two_line_scenario_matches_only_line_two() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    std::fs::write(tmp.path().join("snippet.py"), "import os\nimport random")
        .expect("write snippet");
    let patterns = tmp.path().join("patterns.yaml");
    std::fs::write(
        &patterns,
        "'import\\s+random':\n  severity: warning\n  tags: [import, random]\n",
    )
    .expect("write patterns");

    kibitz_cmd()
        .args(["scan", "snippet.py", "--patterns", "patterns.yaml"])
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stdout(
            predicates::str::contains("snippet.py:2: [warning] import random")
                .and(predicates::str::contains(":1:").not()),
        );
}
