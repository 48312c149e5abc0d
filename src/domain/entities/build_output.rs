//! The artifact under construction

use std::path::PathBuf;

use crate::domain::entities::PackageMetadata;
use crate::domain::value_objects::{Compression, Shebang};

/// How entries of a merge source combine with the newly collected ones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Keep base entries unless a new entry has the same name
    #[default]
    Append,
    /// Discard base entries entirely
    Replace,
}

/// Whether real clock values end up in the archive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampMode {
    #[default]
    Real,
    /// Fixed member times and a placeholder `Build-Timestamp`, for
    /// byte-identical rebuilds
    Disabled,
}

/// Everything the assembler needs to know about the archive it writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub output_path: PathBuf,
    pub shebang: Option<Shebang>,
    /// Written verbatim as `__main__.py`
    pub entry_point_code: Option<String>,
    pub compression: Compression,
    pub merge_source: Option<PathBuf>,
    pub merge_mode: MergeMode,
    pub metadata: Option<PackageMetadata>,
    pub timestamps: TimestampMode,
    pub license_fallback: Option<String>,
}

impl BuildOutput {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            shebang: None,
            entry_point_code: None,
            compression: Compression::default(),
            merge_source: None,
            merge_mode: MergeMode::default(),
            metadata: None,
            timestamps: TimestampMode::default(),
            license_fallback: None,
        }
    }

    pub fn with_shebang(mut self, shebang: Option<Shebang>) -> Self {
        self.shebang = shebang;
        self
    }

    pub fn with_entry_point_code(mut self, code: Option<String>) -> Self {
        self.entry_point_code = code;
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_merge_source(mut self, source: Option<PathBuf>, mode: MergeMode) -> Self {
        self.merge_source = source;
        self.merge_mode = mode;
        self
    }

    pub fn with_metadata(mut self, metadata: Option<PackageMetadata>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_timestamps(mut self, timestamps: TimestampMode) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn with_license_fallback(mut self, fallback: Option<String>) -> Self {
        self.license_fallback = fallback;
        self
    }

    pub fn timestamps_disabled(&self) -> bool {
        self.timestamps == TimestampMode::Disabled
    }
}
