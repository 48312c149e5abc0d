//! Subcommand handlers
//!
//! Each handler wires the infrastructure adapters into a use case and
//! prints the result. Diagnostics go through `tracing` to stderr; the
//! command output itself goes to stdout.

pub mod build;
pub mod info;
pub mod init;
pub mod list;
pub mod validate;
pub mod version;
pub mod watch;

use std::path::PathBuf;

use anyhow::{Context, Result};

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to determine the current directory")
}
