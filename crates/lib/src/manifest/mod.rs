//! Conflict-aware merging of desired fields into `package.json`.
//!
//! `types` holds the in-memory document and merge rules; `store` handles the
//! file: a missing manifest is skipped, an unchanged one is never rewritten.

mod store;
mod types;

pub use store::*;
pub use types::*;
