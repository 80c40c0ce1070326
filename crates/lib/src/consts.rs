//! Fixed names and values shared across the crate.

/// Environment variable that overrides the project root.
pub const ROOT_ENV_VAR: &str = "SCAFFOLD_ROOT";

/// Manifest file name, resolved against the project root.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Value enforced on the manifest's `main` field.
pub const DESIRED_MAIN: &str = "electron/main.js";

/// Scripts merged into the manifest's `scripts` object, in enumeration order.
pub const DESIRED_SCRIPTS: &[(&str, &str)] = &[
  ("dev:renderer", "vite"),
  ("dev:electron", "wait-on http://localhost:5173 && electron ."),
  ("dev", r#"concurrently -k "npm run dev:renderer" "npm run dev:electron""#),
  ("build:renderer", "vite build"),
];
