//! Static table of files materialized into the project root.
//!
//! The table is fixed at compile time. Paths are slash-separated, relative to
//! the project root, and unique.

mod content;

use std::path::PathBuf;

use crate::util::text::normalize_template;

/// A single file to materialize: where it goes and what it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpec {
  /// Slash-separated path relative to the project root.
  pub path: &'static str,
  /// Template body as authored (indented, leading newline).
  pub raw: &'static str,
}

impl FileSpec {
  pub const fn new(path: &'static str, raw: &'static str) -> Self {
    Self { path, raw }
  }

  /// Content as written to disk.
  pub fn content(&self) -> String {
    normalize_template(self.raw)
  }

  /// The relative path converted to the host's separator.
  pub fn relative_path(&self) -> PathBuf {
    self.path.split('/').collect()
  }
}

/// Electron + React + Vite project skeleton, in materialization order.
pub static TEMPLATES: &[FileSpec] = &[
  FileSpec::new("electron/main.js", content::ELECTRON_MAIN_JS),
  FileSpec::new("electron/preload.js", content::ELECTRON_PRELOAD_JS),
  FileSpec::new("src/App.tsx", content::APP_TSX),
  FileSpec::new("src/main.tsx", content::MAIN_TSX),
  FileSpec::new("src/vite-env.d.ts", content::VITE_ENV_D_TS),
  FileSpec::new("tsconfig.json", content::TSCONFIG_JSON),
  FileSpec::new("vite.config.ts", content::VITE_CONFIG_TS),
  FileSpec::new("index.html", content::INDEX_HTML),
];
