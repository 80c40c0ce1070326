//! scaffold-lib: Core logic for the project scaffolder
//!
//! This crate provides the two steps of a scaffold run:
//! - `materialize`: write template files that do not exist yet
//! - `manifest`: merge `main` and `scripts` into `package.json` without
//!   overwriting user edits
//!
//! `scaffold` ties them together against a project root resolved by `paths`.

pub mod consts;
pub mod manifest;
pub mod materialize;
pub mod paths;
pub mod scaffold;
pub mod templates;
pub mod util;
