//! Zip archive access
//!
//! - `reader` - open archives that may start with an interpreter line
//! - `writer` - assemble the zip in memory, prepend the interpreter line,
//!   write atomically and mark executable
//! - `ZipArchiveStore` - the `ArchiveStore` port over both

mod reader;
mod writer;

use std::path::Path;

use crate::domain::entities::{ArchiveEntry, BuildOutput, EntrySet};
use crate::domain::ports::{ArchiveStore, WriteReport};
use crate::error::BundlerResult;

pub use reader::{
    get_interpreter, list_member_names, looks_like_archive, read_member, read_members,
    read_shebang, split_shebang,
};
pub use writer::{write_archive, EXECUTABLE_BITS};

/// `ArchiveStore` backed by the `zip` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveStore;

impl ZipArchiveStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveStore for ZipArchiveStore {
    fn is_archive(&self, path: &Path) -> bool {
        looks_like_archive(path)
    }

    fn read_members(&self, path: &Path) -> BundlerResult<Vec<ArchiveEntry>> {
        read_members(path)
    }

    fn write(&self, output: &BuildOutput, entries: &EntrySet) -> BundlerResult<WriteReport> {
        write_archive(output, entries)
    }
}
