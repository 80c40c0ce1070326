//! Package manifest model and the merge rules applied to it.
//!
//! The manifest is kept as an order-preserving JSON object so that keys this
//! crate knows nothing about survive a rewrite untouched and in place. Two
//! fields are understood:
//!
//! - `main`: a string, enforced to the desired value.
//! - `scripts`: an object of name to command, merged without overwriting.
//!
//! # Merge rules
//!
//! For each desired script, in order:
//!
//! | on disk                  | result     | dirty |
//! |--------------------------|------------|-------|
//! | absent                   | inserted   | yes   |
//! | present, same command    | matching   | no    |
//! | present, other value     | conflict   | no    |
//!
//! Conflicts are terminal: the existing value always wins.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::consts::{DESIRED_MAIN, DESIRED_SCRIPTS};

const MAIN_KEY: &str = "main";
const SCRIPTS_KEY: &str = "scripts";

/// Errors that abort the manifest step. The file is never modified when one
/// of these is returned before the final write.
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to read manifest {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse manifest: {0}")]
  Parse(#[source] serde_json::Error),

  #[error("invalid manifest: {0}")]
  Shape(String),

  #[error("failed to serialize manifest: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("failed to write manifest {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },
}

/// Desired values merged into the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestPatch<'a> {
  pub main: &'a str,
  pub scripts: &'a [(&'a str, &'a str)],
}

impl Default for ManifestPatch<'static> {
  fn default() -> Self {
    Self {
      main: DESIRED_MAIN,
      scripts: DESIRED_SCRIPTS,
    }
  }
}

/// What happened to the `main` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MainChange {
  /// Already had the desired value.
  Unchanged,
  /// Was absent or different; now holds the desired value.
  Set { previous: Option<Value> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainOutcome {
  /// The desired value.
  pub value: String,
  #[serde(flatten)]
  pub change: MainChange,
}

/// Per-script merge state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptState {
  Inserted,
  Matching,
  Conflict { existing: Value },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptOutcome {
  pub name: String,
  pub command: String,
  #[serde(flatten)]
  pub state: ScriptState,
}

/// Everything `PackageManifest::apply` decided.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchReport {
  pub main: MainOutcome,
  pub scripts: Vec<ScriptOutcome>,
}

impl PatchReport {
  /// Whether the in-memory document now differs from what was loaded.
  pub fn is_dirty(&self) -> bool {
    matches!(self.main.change, MainChange::Set { .. })
      || self.scripts.iter().any(|s| s.state == ScriptState::Inserted)
  }

  pub fn conflicts(&self) -> impl Iterator<Item = &ScriptOutcome> {
    self
      .scripts
      .iter()
      .filter(|s| matches!(s.state, ScriptState::Conflict { .. }))
  }
}

/// A parsed `package.json`.
///
/// The root is always an object and `scripts`, when present, is always an
/// object; both are checked on parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageManifest {
  fields: Map<String, Value>,
}

impl PackageManifest {
  /// Parse manifest text, rejecting documents of the wrong shape.
  pub fn from_json(content: &str) -> Result<Self, ManifestError> {
    let value: Value = serde_json::from_str(content).map_err(ManifestError::Parse)?;

    let fields = match value {
      Value::Object(fields) => fields,
      other => {
        return Err(ManifestError::Shape(format!(
          "expected a JSON object at the root, found {}",
          kind(&other)
        )));
      }
    };

    if let Some(scripts) = fields.get(SCRIPTS_KEY) {
      if !scripts.is_object() {
        return Err(ManifestError::Shape(format!(
          "`scripts` must be an object, found {}",
          kind(scripts)
        )));
      }
    }

    Ok(Self { fields })
  }

  /// Pretty JSON with two-space indent and a trailing newline.
  pub fn to_json(&self) -> Result<String, ManifestError> {
    let mut out = serde_json::to_string_pretty(&self.fields).map_err(ManifestError::Serialize)?;
    out.push('\n');
    Ok(out)
  }

  pub fn main(&self) -> Option<&str> {
    self.fields.get(MAIN_KEY).and_then(Value::as_str)
  }

  pub fn script(&self, name: &str) -> Option<&Value> {
    self
      .fields
      .get(SCRIPTS_KEY)
      .and_then(Value::as_object)
      .and_then(|scripts| scripts.get(name))
  }

  /// Merge `patch` into the document.
  pub fn apply(&mut self, patch: &ManifestPatch<'_>) -> Result<PatchReport, ManifestError> {
    let change = if self.main() == Some(patch.main) {
      MainChange::Unchanged
    } else {
      let previous = self
        .fields
        .insert(MAIN_KEY.to_string(), Value::String(patch.main.to_string()));
      MainChange::Set { previous }
    };
    let main = MainOutcome {
      value: patch.main.to_string(),
      change,
    };

    let scripts = self
      .fields
      .entry(SCRIPTS_KEY)
      .or_insert_with(|| Value::Object(Map::new()))
      .as_object_mut()
      .ok_or_else(|| ManifestError::Shape("`scripts` must be an object".to_string()))?;

    let scripts = patch
      .scripts
      .iter()
      .map(|&(name, command)| {
        let state = match scripts.get(name) {
          None => {
            scripts.insert(name.to_string(), Value::String(command.to_string()));
            ScriptState::Inserted
          }
          Some(existing) if existing.as_str() == Some(command) => ScriptState::Matching,
          Some(existing) => ScriptState::Conflict {
            existing: existing.clone(),
          },
        };
        ScriptOutcome {
          name: name.to_string(),
          command: command.to_string(),
          state,
        }
      })
      .collect();

    Ok(PatchReport { main, scripts })
  }
}

fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
