//! Status command implementation.
//!
//! Shows which templates are already present and what `run` would change in
//! `package.json`, without writing anything.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::json;

use scaffold_lib::paths::project_root;
use scaffold_lib::scaffold::{ScaffoldOptions, StatusReport, status};

use crate::cmd::report::{manifest_failure, manifest_json, print_manifest};
use crate::output::{OutputFormat, count, print_info, print_json, print_skip, print_stat};

pub fn cmd_status(root: Option<&Path>, format: OutputFormat) -> Result<()> {
  let root = project_root(root).context("Failed to resolve project root")?;
  let report = status(&ScaffoldOptions::new(root));

  if format.is_json() {
    let files: Vec<_> = report
      .files
      .iter()
      .map(|(path, present)| json!({ "path": path, "present": present }))
      .collect();
    let json_output = json!({ "root": report.root, "files": files, "manifest": manifest_json(&report.manifest) });
    print_json(&json_output)?;
  } else {
    print_text(&report);
  }

  if let Some(message) = manifest_failure(&report.manifest, true) {
    bail!(message);
  }

  Ok(())
}

fn print_text(report: &StatusReport) {
  for (path, present) in &report.files {
    if *present {
      print_skip(&format!("{} present", path));
    } else {
      print_info(&format!("{} missing, would be created", path));
    }
  }
  print_manifest(&report.manifest, true);

  println!();
  print_stat("Root", &report.root.display().to_string());
  print_stat("Missing", &count(report.missing_files(), "file"));
}
