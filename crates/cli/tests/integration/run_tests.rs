//! Run command integration tests: template materialization.

use predicates::prelude::*;

use super::common::{TEMPLATE_PATHS, TestEnv};

#[test]
fn run_creates_every_template() {
  let env = TestEnv::empty();

  let mut assert = env.scaffold_cmd().arg("run").assert().success();
  for path in TEMPLATE_PATHS {
    assert = assert.stdout(predicate::str::contains(format!("created {}", path)));
  }

  for path in TEMPLATE_PATHS {
    assert!(env.path(path).is_file(), "{} should exist", path);
  }
}

#[test]
fn run_without_subcommand_is_run() {
  let env = TestEnv::empty();

  env.scaffold_cmd().assert().success();

  assert!(env.path("electron/main.js").is_file());
}

#[test]
fn templates_are_written_dedented() {
  let env = TestEnv::empty();

  env.scaffold_cmd().assert().success();

  let main_js = env.read_file("electron/main.js");
  assert!(main_js.starts_with("const { app, BrowserWindow, ipcMain } = require('electron');\n"));
  assert!(main_js.contains("\n  mainWindow = new BrowserWindow({\n"));
  assert!(main_js.ends_with("ipcMain.handle('ping', () => 'pong from main');\n"));

  let html = env.read_file("index.html");
  assert!(html.starts_with("<!doctype html>\n<html lang=\"en\">\n  <head>\n"));

  let expected_main_js = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../lib/tests/fixtures/templates/electron/main.js"
  ));
  assert_eq!(main_js, expected_main_js);
  let expected_html = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../lib/tests/fixtures/templates/index.html"));
  assert_eq!(html, expected_html);
}

#[test]
fn run_is_idempotent() {
  let env = TestEnv::empty();

  env.scaffold_cmd().assert().success();
  let first: Vec<String> = TEMPLATE_PATHS.iter().map(|p| env.read_file(p)).collect();

  env
    .scaffold_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("created electron/").not())
    .stdout(predicate::str::contains("0 created, 8 skipped, 0 failed"));

  let second: Vec<String> = TEMPLATE_PATHS.iter().map(|p| env.read_file(p)).collect();
  assert_eq!(first, second);
}

#[test]
fn existing_user_file_is_kept() {
  let env = TestEnv::empty();
  env.write_file("src/App.tsx", "export default () => null;\n");

  env
    .scaffold_cmd()
    .assert()
    .success()
    .stdout(predicate::str::contains("src/App.tsx already exists"));

  assert_eq!(env.read_file("src/App.tsx"), "export default () => null;\n");
  assert!(env.path("src/main.tsx").is_file());
}

#[test]
fn blocked_directory_fails_but_other_files_are_created() {
  let env = TestEnv::empty();
  // A file where the `electron` directory should go.
  env.write_file("electron", "not a directory");

  env
    .scaffold_cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to create directory"))
    .stderr(predicate::str::contains("2 files could not be created"));

  assert!(env.path("src/App.tsx").is_file());
  assert!(env.path("index.html").is_file());
  assert_eq!(env.read_file("electron"), "not a directory");
}

#[test]
fn root_flag_overrides_working_directory() {
  let env = TestEnv::empty();
  let target = TestEnv::empty();

  env
    .scaffold_cmd()
    .arg("--root")
    .arg(target.root())
    .assert()
    .success();

  assert!(target.path("vite.config.ts").is_file());
  assert!(!env.path("vite.config.ts").exists());
}

#[test]
fn root_env_var_is_honored() {
  let env = TestEnv::empty();
  let target = TestEnv::empty();

  env
    .scaffold_cmd()
    .env("SCAFFOLD_ROOT", target.root())
    .assert()
    .success();

  assert!(target.path("tsconfig.json").is_file());
  assert!(!env.path("tsconfig.json").exists());
}

#[test]
fn missing_root_fails_before_writing() {
  let env = TestEnv::empty();

  env
    .scaffold_cmd()
    .arg("--root")
    .arg(env.path("does-not-exist"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to resolve project root"));

  assert!(!env.path("does-not-exist").exists());
}

#[test]
fn json_output_lists_files() {
  let env = TestEnv::empty();
  env.write_file("index.html", "<html></html>");

  let output = env.scaffold_cmd().args(["--output", "json"]).output().unwrap();
  assert!(output.status.success());

  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["success"], true);
  assert_eq!(report["files"]["created"], 7);
  assert_eq!(report["files"]["skipped"], 1);
  assert_eq!(report["files"]["items"][0]["path"], "electron/main.js");
  assert_eq!(report["files"]["items"][0]["status"], "created");
  assert_eq!(report["files"]["items"][7]["status"], "skipped");
  assert_eq!(report["manifest"]["status"], "missing");
}
