//! Non-destructive file materialization.
//!
//! Every template is written only if nothing exists at its target path.
//! Existing entries are never read, compared, or replaced, so running the
//! materializer any number of times is safe.
//!
//! Failures are isolated per file: an error on one template is recorded in
//! the report and the remaining templates are still processed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::templates::FileSpec;

/// Errors for a single template.
#[derive(Debug, Error)]
pub enum MaterializeError {
  #[error("invalid template path {path:?}: must be relative without `..`")]
  InvalidPath { path: String },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: io::Error },
}

/// What happened to a template that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
  /// The file did not exist and was written.
  Created,
  /// Something already existed at the path; it was left alone.
  Skipped,
}

/// Result of materializing one template.
#[derive(Debug)]
pub struct FileOutcome {
  /// Relative path from the template table.
  pub path: &'static str,
  /// Absolute target path.
  pub target: PathBuf,
  pub result: Result<FileAction, MaterializeError>,
}

impl FileOutcome {
  pub fn is_created(&self) -> bool {
    matches!(self.result, Ok(FileAction::Created))
  }

  pub fn is_skipped(&self) -> bool {
    matches!(self.result, Ok(FileAction::Skipped))
  }

  pub fn is_failed(&self) -> bool {
    self.result.is_err()
  }
}

/// Per-template outcomes, in table order.
#[derive(Debug, Default)]
pub struct MaterializeReport {
  pub outcomes: Vec<FileOutcome>,
}

impl MaterializeReport {
  pub fn created(&self) -> usize {
    self.outcomes.iter().filter(|o| o.is_created()).count()
  }

  pub fn skipped(&self) -> usize {
    self.outcomes.iter().filter(|o| o.is_skipped()).count()
  }

  pub fn failed(&self) -> usize {
    self.outcomes.iter().filter(|o| o.is_failed()).count()
  }

  pub fn is_success(&self) -> bool {
    self.failed() == 0
  }
}

/// Materialize every template under `root`.
pub fn materialize(root: &Path, specs: &[FileSpec]) -> MaterializeReport {
  let outcomes = specs
    .iter()
    .map(|spec| {
      let (target, result) = match resolve_target(root, spec) {
        Ok(target) => {
          let result = write_target(&target, spec);
          (target, result)
        }
        // Only used for display; nothing is touched at this path.
        Err(e) => (root.join(spec.path), Err(e)),
      };

      match &result {
        Ok(FileAction::Created) => info!(path = spec.path, "created"),
        Ok(FileAction::Skipped) => debug!(path = spec.path, "skipped, already exists"),
        Err(e) => warn!(path = spec.path, error = %e, "failed to materialize"),
      }

      FileOutcome {
        path: spec.path,
        target,
        result,
      }
    })
    .collect();

  MaterializeReport { outcomes }
}

/// Materialize one template under `root`.
///
/// Parent directories are created before the existence check, so a skipped
/// file still leaves its directory in place.
pub fn materialize_file(root: &Path, spec: &FileSpec) -> Result<FileAction, MaterializeError> {
  let target = resolve_target(root, spec)?;
  write_target(&target, spec)
}

/// Whether something already exists at the template's target path.
pub fn is_present(root: &Path, spec: &FileSpec) -> bool {
  resolve_target(root, spec).is_ok_and(|target| fs::symlink_metadata(target).is_ok())
}

fn resolve_target(root: &Path, spec: &FileSpec) -> Result<PathBuf, MaterializeError> {
  Ok(root.join(validate_relative(spec)?))
}

fn write_target(target: &Path, spec: &FileSpec) -> Result<FileAction, MaterializeError> {
  if let Some(parent) = target.parent() {
    fs::create_dir_all(parent).map_err(|e| MaterializeError::CreateDir {
      path: parent.to_path_buf(),
      source: e,
    })?;
  }

  // symlink_metadata so a dangling symlink also counts as existing.
  if fs::symlink_metadata(target).is_ok() {
    return Ok(FileAction::Skipped);
  }

  let content = spec.content();
  create_new_with(target, |file| file.write_all(content.as_bytes()))
}

/// Create `target` exclusively and fill it with `write`.
///
/// A file that was created but could not be filled is removed again, so the
/// next run does not mistake it for an existing one.
fn create_new_with(target: &Path, write: impl FnOnce(&mut File) -> io::Result<()>) -> Result<FileAction, MaterializeError> {
  let mut file = match OpenOptions::new().write(true).create_new(true).open(target) {
    Ok(file) => file,
    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(FileAction::Skipped),
    Err(e) => {
      return Err(MaterializeError::WriteFile {
        path: target.to_path_buf(),
        source: e,
      });
    }
  };

  if let Err(e) = write(&mut file) {
    drop(file);
    let _ = fs::remove_file(target);
    return Err(MaterializeError::WriteFile {
      path: target.to_path_buf(),
      source: e,
    });
  }

  Ok(FileAction::Created)
}

fn validate_relative(spec: &FileSpec) -> Result<PathBuf, MaterializeError> {
  let path = spec.path;
  let invalid = || MaterializeError::InvalidPath { path: path.to_string() };

  // An empty segment means a leading, trailing, or doubled slash.
  if path.is_empty() || path.split('/').any(|seg| seg.is_empty() || seg == "..") {
    return Err(invalid());
  }

  let relative = spec.relative_path();
  let mut normal = 0;
  for component in relative.components() {
    match component {
      Component::Normal(_) => normal += 1,
      Component::CurDir => {}
      Component::ParentDir | Component::RootDir | Component::Prefix(_) => return Err(invalid()),
    }
  }

  if normal == 0 {
    return Err(invalid());
  }

  Ok(relative)
}
