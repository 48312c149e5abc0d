//! Common test utilities for zipbundler CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus helpers to run the binary
//! - Fixtures: small Python packages and configs

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
