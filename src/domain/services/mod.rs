//! Domain Services
//!
//! Stateless logic over the entities, with I/O injected through ports.

mod exclude_resolver;
mod file_collector;
mod include_resolver;
mod package_resolver;
pub mod paths;
mod staleness;

pub use exclude_resolver::{load_gitignore_patterns, resolve_excludes, ExcludeSources};
pub use file_collector::{CollectOutcome, FileCollector, SkippedSource, SOURCE_EXTENSION};
pub use include_resolver::{resolve_includes, IncludeDecl, IncludeSources};
pub use package_resolver::resolve_packages;
pub use staleness::{StaleReason, StalenessDetector, StalenessRecord};
