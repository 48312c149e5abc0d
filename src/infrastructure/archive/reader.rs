//! Reading zip applications

use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::domain::entities::ArchiveEntry;
use crate::error::{BundlerError, BundlerResult};

const ZIP_MAGIC: &[u8] = b"PK";

/// Split a leading `#!` line off `bytes`.
///
/// Returns the line (without its newline) and the remaining bytes.
pub fn split_shebang(bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    if !bytes.starts_with(b"#!") {
        return (None, bytes);
    }
    match bytes.iter().position(|&b| b == b'\n') {
        Some(pos) => (Some(&bytes[..pos]), &bytes[pos + 1..]),
        None => (Some(bytes), &[]),
    }
}

fn read_file(path: &Path) -> BundlerResult<Vec<u8>> {
    if !path.is_file() {
        return Err(BundlerError::not_found("archive", path));
    }
    Ok(std::fs::read(path)?)
}

fn decode_line(line: &[u8]) -> String {
    let line = line.trim_ascii();
    match std::str::from_utf8(line) {
        Ok(s) => s.to_string(),
        // Latin-1 maps every byte to the code point of the same value.
        Err(_) => line.iter().map(|&b| b as char).collect(),
    }
}

/// The full interpreter line (`#!...`), or `None` when the file has none.
pub fn read_shebang(path: &Path) -> BundlerResult<Option<String>> {
    let bytes = read_file(path)?;
    Ok(split_shebang(&bytes).0.map(decode_line))
}

/// The interpreter named by the archive's first line, without `#!`.
pub fn get_interpreter(path: &Path) -> BundlerResult<Option<String>> {
    let bytes = read_file(path)?;
    Ok(split_shebang(&bytes)
        .0
        .map(|line| decode_line(&line[2..])))
}

fn open(path: &Path) -> BundlerResult<ZipArchive<Cursor<Vec<u8>>>> {
    let bytes = read_file(path)?;
    let (_, zip_bytes) = split_shebang(&bytes);
    Ok(ZipArchive::new(Cursor::new(zip_bytes.to_vec()))?)
}

/// True if `path` is a readable zip, optionally behind an interpreter line.
pub fn looks_like_archive(path: &Path) -> bool {
    let Ok(bytes) = std::fs::read(path) else {
        return false;
    };
    let (_, rest) = split_shebang(&bytes);
    rest.starts_with(ZIP_MAGIC) && ZipArchive::new(Cursor::new(rest)).is_ok()
}

/// Every non-directory member, in archive order.
pub fn read_members(path: &Path) -> BundlerResult<Vec<ArchiveEntry>> {
    let mut archive = open(path)?;
    let mut members = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.is_dir() {
            continue;
        }
        let mut content = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut content)?;
        members.push(ArchiveEntry::from_bytes(file.name().to_string(), content));
    }
    Ok(members)
}

/// Names of every non-directory member, in archive order.
pub fn list_member_names(path: &Path) -> BundlerResult<Vec<String>> {
    let mut archive = open(path)?;
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let file = archive.by_index(i)?;
        if !file.is_dir() {
            names.push(file.name().to_string());
        }
    }
    Ok(names)
}

/// Content of one member, or `None` if the archive has no such member.
pub fn read_member(path: &Path, name: &str) -> BundlerResult<Option<Vec<u8>>> {
    let mut archive = open(path)?;
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;

    fn zip_bytes(members: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in members {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn split_shebang_separates_first_line() {
        let (line, rest) = split_shebang(b"#!/usr/bin/env python3\nPK..");
        assert_eq!(line, Some(&b"#!/usr/bin/env python3"[..]));
        assert_eq!(rest, b"PK..");
        assert_eq!(split_shebang(b"PK.."), (None, &b"PK.."[..]));
    }

    #[test]
    fn reads_members_behind_shebang() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.pyz");
        let mut bytes = b"#!/usr/bin/env python3.12\n".to_vec();
        bytes.extend(zip_bytes(&[("pkg/a.py", "A"), ("__main__.py", "run()")]));
        std::fs::write(&path, bytes).unwrap();

        let members = read_members(&path).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0], ArchiveEntry::from_bytes("pkg/a.py", "A"));
        assert_eq!(get_interpreter(&path).unwrap().as_deref(), Some("/usr/bin/env python3.12"));
        assert_eq!(read_shebang(&path).unwrap().as_deref(), Some("#!/usr/bin/env python3.12"));
        assert!(looks_like_archive(&path));
        assert_eq!(read_member(&path, "__main__.py").unwrap(), Some(b"run()".to_vec()));
        assert_eq!(read_member(&path, "missing.py").unwrap(), None);
    }

    #[test]
    fn interpreter_is_none_without_shebang() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lib.zip");
        std::fs::write(&path, zip_bytes(&[("a.py", "")])).unwrap();
        assert_eq!(get_interpreter(&path).unwrap(), None);
    }

    #[test]
    fn interpreter_falls_back_to_latin1() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("odd.pyz");
        std::fs::write(&path, b"#!/opt/py\xe9\n").unwrap();
        assert_eq!(get_interpreter(&path).unwrap().as_deref(), Some("/opt/py\u{e9}"));
    }

    #[test]
    fn missing_archive_is_not_found() {
        let dir = tempdir().unwrap();
        let err = read_members(&dir.path().join("nope.pyz")).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::NotFound);
    }

    #[test]
    fn plain_files_are_not_archives() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.py");
        std::fs::write(&path, "print('hi')").unwrap();
        assert!(!looks_like_archive(&path));
    }
}
