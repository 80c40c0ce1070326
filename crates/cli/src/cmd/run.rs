//! Implementation of the `scaffold run` command.
//!
//! Materializes the project templates into the root, then merges the desired
//! fields into `package.json`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::info;

use scaffold_lib::materialize::{FileAction, MaterializeReport};
use scaffold_lib::paths::project_root;
use scaffold_lib::scaffold::{ScaffoldOptions, ScaffoldReport, scaffold};

use crate::cmd::report::{manifest_failure, manifest_json, print_manifest};
use crate::output::{OutputFormat, count, print_error, print_json, print_skip, print_stat, print_success};

/// Execute the run command.
///
/// Prints one line per template, one line per manifest field and script, and
/// a summary. Exits non-zero when any template failed or the manifest could
/// not be parsed or written; script conflicts are reported but not fatal.
pub fn cmd_run(root: Option<&Path>, verbose: bool, format: OutputFormat) -> Result<()> {
  let root = project_root(root).context("Failed to resolve project root")?;
  let report = scaffold(&ScaffoldOptions::new(root));
  info!(
    created = report.files.created(),
    skipped = report.files.skipped(),
    failed = report.files.failed(),
    manifest_ok = report.manifest.is_ok(),
    "run complete"
  );

  if format.is_json() {
    print_json(&run_json(&report))?;
  } else {
    print_files(&report.files, verbose);
    print_manifest(&report.manifest, false);
    println!();
    print_stat("Root", &report.root.display().to_string());
    print_stat(
      "Files",
      &format!(
        "{} created, {} skipped, {} failed",
        report.files.created(),
        report.files.skipped(),
        report.files.failed()
      ),
    );
  }

  match (report.files.failed(), manifest_failure(&report.manifest, false)) {
    (0, None) => {}
    (0, Some(manifest)) => bail!(manifest),
    (n, None) => bail!("{} could not be created", count(n, "file")),
    (n, Some(manifest)) => bail!("{} could not be created and {}", count(n, "file"), manifest),
  }

  Ok(())
}

fn print_files(files: &MaterializeReport, verbose: bool) {
  for outcome in &files.outcomes {
    let label = if verbose {
      outcome.target.display().to_string()
    } else {
      outcome.path.to_string()
    };

    match &outcome.result {
      Ok(FileAction::Created) => print_success(&format!("created {}", label)),
      Ok(FileAction::Skipped) => print_skip(&format!("{} already exists, leaving it untouched", label)),
      Err(e) => print_error(&format!("{}: {}", label, e)),
    }
  }
}

fn run_json(report: &ScaffoldReport) -> serde_json::Value {
  let files: Vec<_> = report
    .files
    .outcomes
    .iter()
    .map(|outcome| match &outcome.result {
      Ok(action) => json!({ "path": outcome.path, "status": action }),
      Err(e) => json!({ "path": outcome.path, "status": "failed", "error": e.to_string() }),
    })
    .collect();

  json!({
    "root": report.root,
    "success": report.is_success(),
    "files": {
      "created": report.files.created(),
      "skipped": report.files.skipped(),
      "failed": report.files.failed(),
      "items": files,
    },
    "manifest": manifest_json(&report.manifest),
  })
}
