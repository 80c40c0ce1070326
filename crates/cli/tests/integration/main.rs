//! CLI integration tests for scaffold.

mod common;
mod run_tests;
mod status_tests;
