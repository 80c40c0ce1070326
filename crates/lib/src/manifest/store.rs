//! Reading, patching, and writing `package.json` on disk.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use super::types::{MainChange, ManifestError, ManifestPatch, PackageManifest, PatchReport, ScriptState};

/// Overall result of the manifest step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchStatus {
  /// No manifest at the path; nothing was done.
  Missing,
  /// The manifest already had every desired value.
  Unchanged,
  /// The manifest needed changes. Whether they were saved is in `written`.
  Updated,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestOutcome {
  pub path: PathBuf,
  pub status: PatchStatus,
  /// True only when the file on disk was replaced.
  pub written: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub report: Option<PatchReport>,
}

/// Load a manifest, returning `None` when the file does not exist.
pub fn load_manifest(path: &Path) -> Result<Option<PackageManifest>, ManifestError> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
    Err(e) => {
      return Err(ManifestError::Read {
        path: path.to_path_buf(),
        source: e,
      });
    }
  };

  PackageManifest::from_json(&content).map(Some)
}

/// Replace the manifest on disk.
///
/// Writes to a uniquely named temp file in the same directory and renames it
/// over the target. The temp file is removed if anything fails before the
/// rename. Existing permissions are carried over.
pub fn save_manifest(path: &Path, manifest: &PackageManifest) -> Result<(), ManifestError> {
  let content = manifest.to_json()?;

  let write_err = |source: io::Error| ManifestError::Write {
    path: path.to_path_buf(),
    source,
  };

  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
  temp.write_all(content.as_bytes()).map_err(write_err)?;
  if let Ok(metadata) = fs::metadata(path) {
    temp.as_file().set_permissions(metadata.permissions()).map_err(write_err)?;
  }
  temp.persist(path).map_err(|e| write_err(e.error))?;

  Ok(())
}

/// Merge `patch` into the manifest at `path`, saving only if something changed.
///
/// A missing manifest is not an error. A manifest that fails to parse is
/// returned as an error and left untouched.
pub fn patch_manifest(path: &Path, patch: &ManifestPatch<'_>) -> Result<ManifestOutcome, ManifestError> {
  run(path, patch, true)
}

/// Compute what `patch_manifest` would do without writing anything.
pub fn check_manifest(path: &Path, patch: &ManifestPatch<'_>) -> Result<ManifestOutcome, ManifestError> {
  run(path, patch, false)
}

fn run(path: &Path, patch: &ManifestPatch<'_>, save: bool) -> Result<ManifestOutcome, ManifestError> {
  let Some(mut manifest) = load_manifest(path)? else {
    warn!(path = %path.display(), "manifest not found, skipping");
    return Ok(ManifestOutcome {
      path: path.to_path_buf(),
      status: PatchStatus::Missing,
      written: false,
      report: None,
    });
  };

  let report = manifest.apply(patch)?;
  log_report(&report);

  let dirty = report.is_dirty();
  let written = if dirty && save {
    save_manifest(path, &manifest)?;
    info!(path = %path.display(), "manifest updated");
    true
  } else {
    debug!(path = %path.display(), dirty, "manifest not written");
    false
  };

  Ok(ManifestOutcome {
    path: path.to_path_buf(),
    status: if dirty { PatchStatus::Updated } else { PatchStatus::Unchanged },
    written,
    report: Some(report),
  })
}

fn log_report(report: &PatchReport) {
  if let MainChange::Set { previous } = &report.main.change {
    info!(value = %report.main.value, previous = ?previous, "main field set");
  }

  for script in &report.scripts {
    match &script.state {
      ScriptState::Inserted => info!(script = %script.name, "script added"),
      ScriptState::Matching => debug!(script = %script.name, "script already present"),
      ScriptState::Conflict { existing } => warn!(
        script = %script.name,
        existing = %existing,
        desired = %script.command,
        "script conflict, keeping existing value"
      ),
    }
  }
}
