//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::file_system::{FileSystem, FsEntry, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    fn walk_into(&self, dir: &Path, out: &mut Vec<FsEntry>) -> FsResult<()> {
        let mut children: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| FsError::at(dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        children.sort();

        for path in children {
            // Symlinked directories are listed but not descended into.
            let is_symlink = std::fs::symlink_metadata(&path)
                .map(|m| m.file_type().is_symlink())
                .unwrap_or(false);
            let is_dir = path.is_dir();
            out.push(FsEntry {
                path: path.clone(),
                is_dir,
            });
            if is_dir && !is_symlink {
                self.walk_into(&path, out)?;
            }
        }
        Ok(())
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::at(path, e))
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| FsError::at(path, e))
    }

    fn walk(&self, root: &Path) -> FsResult<Vec<FsEntry>> {
        let mut out = Vec::new();
        self.walk_into(root, &mut out)?;
        Ok(out)
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn walk_lists_nested_entries_sorted() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("pkg/sub")).unwrap();
        std::fs::write(dir.path().join("pkg/b.py"), "").unwrap();
        std::fs::write(dir.path().join("pkg/a.py"), "").unwrap();
        std::fs::write(dir.path().join("pkg/sub/c.py"), "").unwrap();

        let fs = LocalFs::new();
        let files = fs.walk_files(&dir.path().join("pkg")).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("pkg/a.py"),
                PathBuf::from("pkg/b.py"),
                PathBuf::from("pkg/sub/c.py")
            ]
        );
    }

    #[test]
    fn read_missing_file_is_not_found_with_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.py");
        let err = LocalFs::new().read_bytes(&missing).unwrap_err();
        assert!(matches!(err, FsError::NotFound(ref p) if p == &missing));
    }

    #[test]
    fn modified_reports_file_mtime() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.py");
        std::fs::write(&file, "x").unwrap();
        let when = SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000_000);
        std::fs::File::options()
            .write(true)
            .open(&file)
            .unwrap()
            .set_modified(when)
            .unwrap();

        assert_eq!(LocalFs::new().modified(&file).unwrap(), when);
    }

    #[test]
    fn expand_home_leaves_plain_paths_alone() {
        assert_eq!(expand_home(Path::new("cfg.toml")), PathBuf::from("cfg.toml"));
    }
}
