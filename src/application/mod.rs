//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - resolve, plan, check staleness and write the archive
//! - `WatchUseCase` - poll sources and rebuild on change
//! - `list_sources` / `render_tree` - preview what a build would collect
//! - `inspect_archive` - describe an existing archive

pub mod build;
pub mod info;
pub mod list;
pub mod watch;

pub use build::{
    BuildOptions, BuildPlan, BuildRequest, BuildResult, BuildStatus, BuildUseCase, EntryPlanner,
    ResolvedBuild,
};
pub use info::{file_sha256, inspect_archive, ArchiveInfo};
pub use list::{list_sources, render_tree};
pub use watch::{ChangeSet, ChangeTracker, WatchEvent, WatchOptions, WatchState, WatchUseCase};
