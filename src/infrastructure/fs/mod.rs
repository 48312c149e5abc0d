//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;
#[cfg(test)]
mod mock;

pub use local::{expand_home, LocalFs};
#[cfg(test)]
pub use mock::MockFileSystem;
