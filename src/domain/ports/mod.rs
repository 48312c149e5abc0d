//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archive_store;
pub mod build_logger;
pub mod file_system;
pub mod pattern_matcher;

pub use archive_store::{ArchiveStore, WriteReport};
pub use build_logger::{BuildLogger, LogLevel, NoopLogger, RecordingLogger};
pub use file_system::{FileSystem, FsEntry, FsError, FsResult};
pub use pattern_matcher::PatternMatcher;
