//! Rendering of manifest outcomes shared by `run` and `status`.

use serde_json::{Value, json};

use scaffold_lib::consts::MANIFEST_FILENAME;
use scaffold_lib::manifest::{MainChange, ManifestError, ManifestOutcome, PatchStatus, ScriptState};

use crate::output::{print_skip, print_success, print_warning};

/// Print one line per manifest field and script, then a summary line.
///
/// With `pending` set, wording describes what a run would do. Errors are not
/// printed here; see [`manifest_failure`].
pub fn print_manifest(result: &Result<ManifestOutcome, ManifestError>, pending: bool) {
  let Ok(outcome) = result else {
    return;
  };

  let name = outcome
    .path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_else(|| outcome.path.display().to_string());

  let Some(report) = &outcome.report else {
    print_warning(&format!("{} not found, skipping its update", name));
    return;
  };

  let (set, add) = if pending { ("would be set", "would be added") } else { ("set", "added") };

  match &report.main.change {
    MainChange::Set { .. } => print_success(&format!("main {} to '{}'", set, report.main.value)),
    MainChange::Unchanged => print_skip(&format!("main is already '{}'", report.main.value)),
  }

  for script in &report.scripts {
    match &script.state {
      ScriptState::Inserted => print_success(&format!("script '{}' {}", script.name, add)),
      ScriptState::Matching => print_skip(&format!("script '{}' already present and matching", script.name)),
      ScriptState::Conflict { existing } => print_warning(&format!(
        "conflict: script '{}' already exists with a different value ({}), keeping it",
        script.name, existing
      )),
    }
  }

  match (outcome.status, outcome.written) {
    (_, true) => print_success(&format!("{} updated", name)),
    (PatchStatus::Updated, false) => print_success(&format!("{} would be updated", name)),
    _ => print_skip(&format!("{} already has the required fields, no changes", name)),
  }
}

/// Message for a failed manifest step, used as the command's exit error.
pub fn manifest_failure(result: &Result<ManifestOutcome, ManifestError>, pending: bool) -> Option<String> {
  let verb = if pending { "checked" } else { "updated" };
  result
    .as_ref()
    .err()
    .map(|e| format!("{} could not be {}: {}", MANIFEST_FILENAME, verb, e))
}

/// JSON form of a manifest result.
pub fn manifest_json(result: &Result<ManifestOutcome, ManifestError>) -> Value {
  match result {
    Ok(outcome) => serde_json::to_value(outcome).unwrap_or_else(|e| json!({ "error": e.to_string() })),
    Err(e) => json!({ "status": "error", "error": e.to_string() }),
  }
}
