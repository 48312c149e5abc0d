//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system (and an in-memory one for tests)
//! - `archive/` - zip reading and writing
//! - `matcher` - gitignore-style exclude matching
//! - `logging` - `tracing` logger and subscriber

pub mod archive;
pub mod fs;
pub mod logging;
pub mod matcher;

// Re-export for convenience
pub use archive::ZipArchiveStore;
pub use fs::LocalFs;
pub use logging::{init_logging, TracingLogger};
pub use matcher::GitignoreMatcher;
