//! Common test utilities for deploykit CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated sandbox with config, source and home directories
//! - Assertion macros: `assert_output_contains!`, `assert_exists!`
//! - Fixtures: Reusable catalog and settings content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
