//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Every file the scaffolder materializes.
pub const TEMPLATE_PATHS: &[&str] = &[
  "electron/main.js",
  "electron/preload.js",
  "src/App.tsx",
  "src/main.tsx",
  "src/vite-env.d.ts",
  "tsconfig.json",
  "vite.config.ts",
  "index.html",
];

/// Isolated test environment.
///
/// Each test gets its own temporary project root.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create an empty project root.
  pub fn empty() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Create a project root containing `package.json` with `content`.
  pub fn with_manifest(content: &str) -> Self {
    let env = Self::empty();
    env.write_file("package.json", content);
    env
  }

  pub fn root(&self) -> &Path {
    self.temp.path()
  }

  pub fn path(&self, relative_path: &str) -> PathBuf {
    self.root().join(relative_path)
  }

  /// Write a file relative to the project root.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.path(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn read_file(&self, relative_path: &str) -> String {
    std::fs::read_to_string(self.path(relative_path))
      .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
  }

  pub fn manifest(&self) -> serde_json::Value {
    serde_json::from_str(&self.read_file("package.json")).unwrap()
  }

  /// Get a Command for the scaffold binary running inside the project root.
  ///
  /// `SCAFFOLD_ROOT` is cleared so the working directory decides the root.
  pub fn scaffold_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("scaffold");
    cmd.current_dir(self.root());
    cmd.env_remove("SCAFFOLD_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
  }
}
