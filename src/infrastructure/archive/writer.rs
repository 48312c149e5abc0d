//! Writing zip applications

use std::io::{Cursor, Write};
use std::path::Path;

use chrono::{Datelike, Timelike};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod as ZipMethod, DateTime, ZipWriter};

use crate::domain::entities::{BuildOutput, EntryContent, EntrySet};
use crate::domain::ports::WriteReport;
use crate::domain::value_objects::{Compression, CompressionMethod};
use crate::error::{BundlerError, BundlerResult};

/// Execute permission for owner, group and other
pub const EXECUTABLE_BITS: u32 = 0o111;

const MEMBER_PERMISSIONS: u32 = 0o644;

fn zip_method(method: CompressionMethod) -> ZipMethod {
    match method {
        CompressionMethod::Stored => ZipMethod::Stored,
        CompressionMethod::Deflate => ZipMethod::Deflated,
        CompressionMethod::Bzip2 => ZipMethod::Bzip2,
        CompressionMethod::Zstd => ZipMethod::Zstd,
    }
}

fn member_time(output: &BuildOutput) -> DateTime {
    if output.timestamps_disabled() {
        return DateTime::default();
    }
    let now = chrono::Local::now();
    DateTime::from_date_and_time(
        u16::try_from(now.year()).unwrap_or(1980),
        now.month() as u8,
        now.day() as u8,
        now.hour() as u8,
        now.minute() as u8,
        now.second().min(59) as u8,
    )
    .unwrap_or_default()
}

fn file_options(compression: &Compression, time: DateTime) -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(zip_method(compression.method))
        .compression_level(compression.effective_level().map(i64::from))
        .last_modified_time(time)
        .unix_permissions(MEMBER_PERMISSIONS)
}

/// Build the zip container in memory.
fn build_zip(output: &BuildOutput, entries: &EntrySet) -> BundlerResult<Vec<u8>> {
    let options = file_options(&output.compression, member_time(output));
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for entry in entries.iter() {
        writer.start_file(entry.name.as_str(), options)?;
        match &entry.content {
            EntryContent::Bytes(bytes) => writer.write_all(bytes)?,
            EntryContent::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => BundlerError::not_found("source file", path),
                    _ => BundlerError::Io(e),
                })?;
                writer.write_all(&bytes)?;
            }
        }
    }

    Ok(writer.finish()?.into_inner())
}

/// Write `entries` to `output.output_path`.
///
/// The file is written next to the target and renamed over it, starts with
/// the interpreter line when one is set, and gains execute permission.
pub fn write_archive(output: &BuildOutput, entries: &EntrySet) -> BundlerResult<WriteReport> {
    let zip_bytes = build_zip(output, entries)?;

    let target = output.output_path.as_path();
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
    let mut written = 0u64;
    if let Some(shebang) = &output.shebang {
        let prefix = shebang.to_prefix();
        tmp.write_all(&prefix)?;
        written += prefix.len() as u64;
    }
    tmp.write_all(&zip_bytes)?;
    written += zip_bytes.len() as u64;
    tmp.as_file().sync_all()?;

    make_executable(tmp.path(), target)?;
    tmp.persist(target).map_err(|e| BundlerError::Io(e.error))?;

    Ok(WriteReport {
        output: target.to_path_buf(),
        entry_count: entries.len(),
        bytes_written: written,
    })
}

#[cfg(unix)]
fn make_executable(tmp: &Path, target: &Path) -> BundlerResult<()> {
    use std::os::unix::fs::PermissionsExt;

    // Keep the mode of a previous build; new files start out like any
    // regular file.
    let base = std::fs::metadata(target)
        .map(|m| m.permissions().mode() & 0o777)
        .unwrap_or(0o644);
    std::fs::set_permissions(
        tmp,
        std::fs::Permissions::from_mode(base | EXECUTABLE_BITS),
    )?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_tmp: &Path, _target: &Path) -> BundlerResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ArchiveEntry, TimestampMode};
    use crate::domain::value_objects::Shebang;
    use crate::infrastructure::archive::{list_member_names, read_member};
    use tempfile::tempdir;

    fn entries() -> EntrySet {
        vec![
            ArchiveEntry::from_bytes("pkg/__init__.py", ""),
            ArchiveEntry::from_bytes("pkg/module.py", "x = 1\n"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn writes_shebang_then_zip() {
        let dir = tempdir().unwrap();
        let output = BuildOutput::new(dir.path().join("dist/app.pyz"))
            .with_shebang(Some(Shebang::new("/usr/bin/env python3.12")));

        let report = write_archive(&output, &entries()).unwrap();

        let bytes = std::fs::read(&output.output_path).unwrap();
        assert!(bytes.starts_with(b"#!/usr/bin/env python3.12\nPK"));
        assert_eq!(report.entry_count, 2);
        assert_eq!(report.bytes_written, bytes.len() as u64);
        assert_eq!(
            list_member_names(&output.output_path).unwrap(),
            vec!["pkg/__init__.py", "pkg/module.py"]
        );
    }

    #[test]
    fn without_shebang_file_starts_with_zip_magic() {
        let dir = tempdir().unwrap();
        let output = BuildOutput::new(dir.path().join("lib.zip"));
        write_archive(&output, &entries()).unwrap();
        let bytes = std::fs::read(&output.output_path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn compressed_members_read_back_intact() {
        let dir = tempdir().unwrap();
        for compression in [
            Compression::deflate(Some(9)).unwrap(),
            Compression::new(CompressionMethod::Bzip2, None).unwrap(),
            Compression::new(CompressionMethod::Zstd, None).unwrap(),
        ] {
            let path = dir.path().join(format!("{}.pyz", compression.method));
            let output = BuildOutput::new(&path).with_compression(compression);
            write_archive(&output, &entries()).unwrap();
            assert_eq!(
                read_member(&path, "pkg/module.py").unwrap(),
                Some(b"x = 1\n".to_vec())
            );
        }
    }

    #[test]
    fn disabled_timestamps_are_byte_identical() {
        let dir = tempdir().unwrap();
        let a = BuildOutput::new(dir.path().join("a.pyz")).with_timestamps(TimestampMode::Disabled);
        let b = BuildOutput::new(dir.path().join("b.pyz")).with_timestamps(TimestampMode::Disabled);
        write_archive(&a, &entries()).unwrap();
        write_archive(&b, &entries()).unwrap();
        assert_eq!(
            std::fs::read(&a.output_path).unwrap(),
            std::fs::read(&b.output_path).unwrap()
        );
    }

    #[test]
    fn missing_source_file_is_not_found() {
        let dir = tempdir().unwrap();
        let mut set = EntrySet::new();
        set.insert(ArchiveEntry::from_file("a.py", dir.path().join("gone.py")));
        let output = BuildOutput::new(dir.path().join("x.pyz"));
        let err = write_archive(&output, &set).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::NotFound);
        assert!(!output.output_path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn output_is_executable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let output = BuildOutput::new(dir.path().join("app.pyz"));
        write_archive(&output, &entries()).unwrap();
        let mode = std::fs::metadata(&output.output_path).unwrap().permissions().mode();
        assert_eq!(mode & EXECUTABLE_BITS, EXECUTABLE_BITS);
    }
}
