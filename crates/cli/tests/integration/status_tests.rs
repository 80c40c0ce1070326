//! Status command integration tests.

use predicates::prelude::*;

use super::common::{TEMPLATE_PATHS, TestEnv};

#[test]
fn status_on_empty_root_lists_missing_files() {
  let env = TestEnv::empty();

  env
    .scaffold_cmd()
    .arg("status")
    .assert()
    .success()
    .stdout(predicate::str::contains("electron/main.js missing, would be created"))
    .stdout(predicate::str::contains("Missing: 8 files"));

  for path in TEMPLATE_PATHS {
    assert!(!env.path(path).exists(), "status must not create {}", path);
  }
}

#[test]
fn status_after_run_reports_everything_present() {
  let env = TestEnv::with_manifest("{}");
  env.scaffold_cmd().assert().success();

  env
    .scaffold_cmd()
    .arg("status")
    .assert()
    .success()
    .stdout(predicate::str::contains("Missing: 0 files"))
    .stdout(predicate::str::contains("main is already 'electron/main.js'"));
}

#[test]
fn status_does_not_touch_manifest() {
  let env = TestEnv::with_manifest(r#"{"name": "app"}"#);

  env
    .scaffold_cmd()
    .arg("status")
    .assert()
    .success()
    .stdout(predicate::str::contains("main would be set to 'electron/main.js'"))
    .stdout(predicate::str::contains("script 'dev' would be added"))
    .stdout(predicate::str::contains("package.json would be updated"));

  assert_eq!(env.read_file("package.json"), r#"{"name": "app"}"#);
}

#[test]
fn status_json_output() {
  let env = TestEnv::empty();
  env.write_file("tsconfig.json", "{}");

  let output = env.scaffold_cmd().args(["status", "--output", "json"]).output().unwrap();
  assert!(output.status.success());

  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let files = report["files"].as_array().unwrap();
  assert_eq!(files.len(), 8);
  assert!(files.iter().any(|f| f["path"] == "tsconfig.json" && f["present"] == true));
  assert_eq!(report["manifest"]["status"], "missing");
}

#[test]
fn status_fails_on_malformed_manifest() {
  let env = TestEnv::with_manifest("[not json");

  env
    .scaffold_cmd()
    .arg("status")
    .assert()
    .failure()
    .stderr(predicate::str::contains("package.json could not be checked: failed to parse manifest"))
    .stderr(predicate::str::contains("could not be updated").not());

  assert_eq!(env.read_file("package.json"), "[not json");
}
