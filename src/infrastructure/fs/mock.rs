//! In-memory FileSystem for unit tests

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use crate::domain::ports::file_system::{FileSystem, FsEntry, FsError, FsResult};

/// Files keyed by absolute path; directories are implied by file paths.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<BTreeMap<PathBuf, (Vec<u8>, SystemTime)>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        self.add_file_at(path, content, SystemTime::UNIX_EPOCH);
    }

    pub fn add_file_at(&self, path: impl Into<PathBuf>, content: &str, mtime: SystemTime) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), (content.as_bytes().to_vec(), mtime));
    }

    fn dirs(&self) -> BTreeSet<PathBuf> {
        let files = self.files.lock().unwrap();
        let mut dirs = BTreeSet::new();
        for path in files.keys() {
            let mut current = path.parent();
            while let Some(dir) = current {
                if dir.as_os_str().is_empty() {
                    break;
                }
                dirs.insert(dir.to_path_buf());
                current = dir.parent();
            }
        }
        dirs
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs().contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|(content, _)| content.clone())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|(_, mtime)| *mtime)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn walk(&self, root: &Path) -> FsResult<Vec<FsEntry>> {
        if !self.is_dir(root) {
            return Err(FsError::NotFound(root.to_path_buf()));
        }
        let mut entries: Vec<FsEntry> = self
            .dirs()
            .into_iter()
            .filter(|d| d != root && d.starts_with(root))
            .map(|path| FsEntry { path, is_dir: true })
            .chain(
                self.files
                    .lock()
                    .unwrap()
                    .keys()
                    .filter(|p| p.starts_with(root))
                    .map(|path| FsEntry {
                        path: path.clone(),
                        is_dir: false,
                    }),
            )
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}
