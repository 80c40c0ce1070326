//! End-to-end run: materialize templates, then patch the manifest.
//!
//! The two steps are independent. A failure in one does not prevent the other
//! and nothing is rolled back.

use std::path::PathBuf;

use tracing::info;

use crate::manifest::{self, ManifestError, ManifestOutcome, ManifestPatch};
use crate::materialize::{self, MaterializeReport};
use crate::paths::manifest_path;
use crate::templates::{FileSpec, TEMPLATES};

/// Inputs for a scaffold run.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions<'a> {
  /// Resolved project root.
  pub root: PathBuf,
  pub templates: &'a [FileSpec],
  pub patch: ManifestPatch<'a>,
}

impl ScaffoldOptions<'static> {
  /// The electron + react skeleton against `root`.
  pub fn new(root: PathBuf) -> Self {
    Self {
      root,
      templates: TEMPLATES,
      patch: ManifestPatch::default(),
    }
  }
}

#[derive(Debug)]
pub struct ScaffoldReport {
  pub root: PathBuf,
  pub files: MaterializeReport,
  pub manifest: Result<ManifestOutcome, ManifestError>,
}

impl ScaffoldReport {
  /// True when no file failed and the manifest step did not error.
  /// Script conflicts do not count as failures.
  pub fn is_success(&self) -> bool {
    self.files.is_success() && self.manifest.is_ok()
  }
}

/// Run both steps against `options.root`.
pub fn scaffold(options: &ScaffoldOptions<'_>) -> ScaffoldReport {
  info!(root = %options.root.display(), "scaffolding project");

  let files = materialize::materialize(&options.root, options.templates);
  let manifest = manifest::patch_manifest(&manifest_path(&options.root), &options.patch);

  ScaffoldReport {
    root: options.root.clone(),
    files,
    manifest,
  }
}

/// Presence of each template and the pending manifest changes. Writes nothing.
#[derive(Debug)]
pub struct StatusReport {
  pub root: PathBuf,
  pub files: Vec<(&'static str, bool)>,
  pub manifest: Result<ManifestOutcome, ManifestError>,
}

pub fn status(options: &ScaffoldOptions<'_>) -> StatusReport {
  let files = options
    .templates
    .iter()
    .map(|spec| (spec.path, materialize::is_present(&options.root, spec)))
    .collect();
  let manifest = manifest::check_manifest(&manifest_path(&options.root), &options.patch);

  StatusReport {
    root: options.root.clone(),
    files,
    manifest,
  }
}

impl StatusReport {
  pub fn missing_files(&self) -> usize {
    self.files.iter().filter(|(_, present)| !present).count()
  }
}
