//! Project root resolution.
//!
//! The root is taken from, in order: an explicit path, the `SCAFFOLD_ROOT`
//! environment variable, the current working directory.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::consts::{MANIFEST_FILENAME, ROOT_ENV_VAR};

#[derive(Debug, Error)]
pub enum RootError {
  #[error("project root does not exist: {}", path.display())]
  NotFound { path: PathBuf },

  #[error("project root is not a directory: {}", path.display())]
  NotADirectory { path: PathBuf },

  #[error("failed to canonicalize project root {}: {source}", path.display())]
  Canonicalize { path: PathBuf, source: io::Error },

  #[error("failed to read current directory: {0}")]
  CurrentDir(#[source] io::Error),
}

/// Resolve the project root all templates and the manifest are relative to.
pub fn project_root(explicit: Option<&Path>) -> Result<PathBuf, RootError> {
  let candidate = match explicit {
    Some(path) => path.to_path_buf(),
    None => match std::env::var_os(ROOT_ENV_VAR).filter(|v| !v.is_empty()) {
      Some(value) => PathBuf::from(value),
      None => std::env::current_dir().map_err(RootError::CurrentDir)?,
    },
  };

  if !candidate.exists() {
    return Err(RootError::NotFound { path: candidate });
  }
  if !candidate.is_dir() {
    return Err(RootError::NotADirectory { path: candidate });
  }

  let root = dunce::canonicalize(&candidate).map_err(|e| RootError::Canonicalize {
    path: candidate.clone(),
    source: e,
  })?;

  debug!(root = %root.display(), "resolved project root");
  Ok(root)
}

/// Path of the package manifest inside `root`.
pub fn manifest_path(root: &Path) -> PathBuf {
  root.join(MANIFEST_FILENAME)
}
