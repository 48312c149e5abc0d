//! Archive entries and the ordered set they are assembled into

use std::collections::HashMap;
use std::path::PathBuf;

/// Archive name of the startup module
pub const MAIN_MODULE: &str = "__main__.py";

/// One collected file: where it lives on disk and where it goes in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub source_path: PathBuf,
    /// `/`-separated, relative
    pub archive_name: String,
}

impl SourceEntry {
    pub fn new(source_path: impl Into<PathBuf>, archive_name: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            archive_name: archive_name.into(),
        }
    }
}

/// Where the bytes of an archive member come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    /// Read from disk at write time
    File(PathBuf),
    /// Already in memory (merged members, generated files)
    Bytes(Vec<u8>),
}

/// A member of the archive being written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub content: EntryContent,
}

impl ArchiveEntry {
    pub fn from_file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            content: EntryContent::File(path.into()),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: EntryContent::Bytes(bytes.into()),
        }
    }

    /// Disk path backing this entry, if any
    pub fn source_path(&self) -> Option<&PathBuf> {
        match &self.content {
            EntryContent::File(path) => Some(path),
            EntryContent::Bytes(_) => None,
        }
    }
}

impl From<SourceEntry> for ArchiveEntry {
    fn from(entry: SourceEntry) -> Self {
        ArchiveEntry::from_file(entry.archive_name, entry.source_path)
    }
}

/// Anything kept in an [`EntrySet`]: an archive name plus an optional file
/// on disk.
pub trait Member {
    fn key(&self) -> &str;
    fn disk_path(&self) -> Option<&PathBuf>;
}

impl Member for ArchiveEntry {
    fn key(&self) -> &str {
        &self.name
    }

    fn disk_path(&self) -> Option<&PathBuf> {
        self.source_path()
    }
}

impl Member for SourceEntry {
    fn key(&self) -> &str {
        &self.archive_name
    }

    fn disk_path(&self) -> Option<&PathBuf> {
        Some(&self.source_path)
    }
}

/// Entries keyed by archive name.
///
/// Insertion order is kept. Inserting a name that is already present replaces
/// the content in place, so the entry keeps its first position and the last
/// write wins.
#[derive(Debug, Clone)]
pub struct EntrySet<E = ArchiveEntry> {
    entries: Vec<E>,
    index: HashMap<String, usize>,
}

impl<E> Default for EntrySet<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<E: Member> EntrySet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Returns true if it replaced an existing one.
    pub fn insert(&mut self, entry: E) -> bool {
        match self.index.get(entry.key()) {
            Some(&pos) => {
                self.entries[pos] = entry;
                true
            }
            None => {
                self.index.insert(entry.key().to_string(), self.entries.len());
                self.entries.push(entry);
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&E> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key()).collect()
    }

    /// Disk paths of all file-backed entries
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter_map(|e| e.disk_path().cloned())
            .collect()
    }

    pub fn into_vec(self) -> Vec<E> {
        self.entries
    }
}

impl<E: Member> Extend<E> for EntrySet<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl<E: Member> FromIterator<E> for EntrySet<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut set = EntrySet::new();
        set.extend(iter);
        set
    }
}
