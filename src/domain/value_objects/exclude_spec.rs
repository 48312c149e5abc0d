//! Exclude glob patterns

use std::path::{Path, PathBuf};

use super::Origin;

/// A glob pattern that removes matching files from collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSpec {
    pub pattern: String,
    /// Directory the pattern is relative to. `None` means the parent of
    /// whichever source directory is being collected.
    pub root: Option<PathBuf>,
    pub origin: Origin,
}

impl ExcludeSpec {
    pub fn new(pattern: impl Into<String>, origin: Origin) -> Self {
        Self {
            pattern: pattern.into(),
            root: None,
            origin,
        }
    }

    pub fn rooted(pattern: impl Into<String>, root: impl Into<PathBuf>, origin: Origin) -> Self {
        Self {
            pattern: pattern.into(),
            root: Some(root.into()),
            origin,
        }
    }

    /// Root to evaluate `file` against: the pattern's own root when the file
    /// lies beneath it, otherwise `fallback`.
    pub fn root_for<'a>(&'a self, file: &Path, fallback: &'a Path) -> &'a Path {
        match &self.root {
            Some(root) if file.starts_with(root) => root,
            _ => fallback,
        }
    }
}
