//! zipbundler - bundle Python packages into executable zip applications
//!
//! Collects package sources, applies include and exclude rules, optionally
//! merges an existing archive, and writes a zip that starts with an
//! interpreter line so it can be run directly.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    inspect_archive, list_sources, render_tree, ArchiveInfo, BuildOptions, BuildRequest,
    BuildResult, BuildStatus, BuildUseCase, WatchEvent, WatchOptions, WatchUseCase,
};
pub use config::{load_config, validate_config, BundlerConfig, LoadedConfig, ValidationReport};
pub use domain::ports::{BuildLogger, LogLevel};
pub use error::{BundlerError, BundlerResult, ErrorKind};
pub use infrastructure::{GitignoreMatcher, LocalFs, TracingLogger, ZipArchiveStore};
