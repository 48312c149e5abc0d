//! Inspection of an existing zip application

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::entities::{parse_pkg_info, PKG_INFO};
use crate::error::{BundlerError, BundlerResult};
use crate::infrastructure::archive::{get_interpreter, list_member_names, read_member};

/// What `zipbundler info` reports about an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveInfo {
    pub path: PathBuf,
    /// Interpreter line without `#!`
    pub interpreter: Option<String>,
    /// `PKG-INFO` fields in file order; empty when the member is absent
    pub metadata: Vec<(String, String)>,
    pub member_count: usize,
    /// Hex digest of the whole file, interpreter line included
    pub sha256: String,
}

impl ArchiveInfo {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

pub fn inspect_archive(path: &Path) -> BundlerResult<ArchiveInfo> {
    if !path.is_file() {
        return Err(BundlerError::not_found("archive", path));
    }

    let interpreter = get_interpreter(path)?;
    let member_count = list_member_names(path)?.len();
    let metadata = match read_member(path, PKG_INFO)? {
        Some(bytes) => parse_pkg_info(&String::from_utf8_lossy(&bytes)),
        None => Vec::new(),
    };

    Ok(ArchiveInfo {
        path: path.to_path_buf(),
        interpreter,
        metadata,
        member_count,
        sha256: file_sha256(path)?,
    })
}

/// Lowercase hex SHA-256 of a file's bytes.
pub fn file_sha256(path: &Path) -> BundlerResult<String> {
    let bytes = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        ArchiveEntry, BuildOutput, EntrySet, PackageMetadata, TimestampMode,
    };
    use crate::domain::value_objects::Shebang;
    use crate::error::ErrorKind;
    use crate::infrastructure::archive::write_archive;
    use tempfile::tempdir;

    #[test]
    fn reports_interpreter_metadata_and_digest() {
        let dir = tempdir().unwrap();
        let output = BuildOutput::new(dir.path().join("app.pyz"))
            .with_shebang(Some(Shebang::new("/usr/bin/env python3.11")))
            .with_timestamps(TimestampMode::Disabled);
        let metadata = PackageMetadata {
            name: Some("Demo".into()),
            version: Some("2.0".into()),
            ..Default::default()
        };
        let mut entries = EntrySet::new();
        entries.insert(ArchiveEntry::from_bytes("app/__init__.py", ""));
        entries.insert(ArchiveEntry::from_bytes(
            PKG_INFO,
            metadata.render_pkg_info(None, "<build-timestamp>"),
        ));
        write_archive(&output, &entries).unwrap();

        let info = inspect_archive(&output.output_path).unwrap();

        assert_eq!(info.interpreter.as_deref(), Some("/usr/bin/env python3.11"));
        assert_eq!(info.member_count, 2);
        assert_eq!(info.field("name"), Some("Demo"));
        assert_eq!(info.field("Version"), Some("2.0"));
        assert_eq!(info.sha256.len(), 64);
        assert_eq!(info.sha256, file_sha256(&output.output_path).unwrap());
    }

    #[test]
    fn archive_without_metadata_has_empty_fields() {
        let dir = tempdir().unwrap();
        let output = BuildOutput::new(dir.path().join("lib.zip"));
        let mut entries = EntrySet::new();
        entries.insert(ArchiveEntry::from_bytes("lib/__init__.py", ""));
        write_archive(&output, &entries).unwrap();

        let info = inspect_archive(&output.output_path).unwrap();

        assert!(info.interpreter.is_none());
        assert!(info.metadata.is_empty());
    }

    #[test]
    fn missing_archive_is_not_found() {
        let dir = tempdir().unwrap();
        let err = inspect_archive(&dir.path().join("nope.pyz")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
