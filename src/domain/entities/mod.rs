//! Domain Entities
//!
//! - `SourceEntry` / `ArchiveEntry` - files destined for the archive
//! - `EntrySet` - ordered, last-write-wins collection of archive or source entries
//! - `BuildOutput` - the artifact under construction
//! - `PackageMetadata` - the `PKG-INFO` record

mod archive_entry;
mod build_output;
mod metadata;

pub use archive_entry::{
    ArchiveEntry, EntryContent, EntrySet, Member, SourceEntry, MAIN_MODULE,
};
pub use build_output::{BuildOutput, MergeMode, TimestampMode};
pub use metadata::{
    parse_pkg_info, PackageMetadata, BUILD_TIMESTAMP_FORMAT, BUILD_TIMESTAMP_PLACEHOLDER,
    DEFAULT_LICENSE_FALLBACK, METADATA_VERSION, PKG_INFO,
};
