//! ArchiveStore port - reading and writing zip containers

use std::path::{Path, PathBuf};

use crate::domain::entities::{ArchiveEntry, BuildOutput, EntrySet};
use crate::error::BundlerResult;

/// Summary of a finished archive write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub output: PathBuf,
    pub entry_count: usize,
    pub bytes_written: u64,
}

/// Zip container access used by the assembler
///
/// Implementations:
/// - `ZipArchiveStore` - `zip` crate backed
pub trait ArchiveStore {
    /// True if `path` is a file holding a zip container (a leading shebang
    /// line is allowed).
    fn is_archive(&self, path: &Path) -> bool;

    /// Every non-directory member of an existing archive, in archive order.
    fn read_members(&self, path: &Path) -> BundlerResult<Vec<ArchiveEntry>>;

    /// Write `entries` to `output.output_path`, honoring the output's
    /// compression, timestamp mode and interpreter line.
    fn write(&self, output: &BuildOutput, entries: &EntrySet) -> BundlerResult<WriteReport>;
}
