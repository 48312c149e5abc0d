//! File Collector
//!
//! Walks source directories and turns every eligible source file into a
//! [`SourceEntry`] named relative to the directory's parent.

use std::path::{Path, PathBuf};

use crate::domain::entities::{EntrySet, SourceEntry};
use crate::domain::ports::{BuildLogger, FileSystem, PatternMatcher};
use crate::domain::value_objects::ExcludeSpec;
use crate::error::{BundlerError, BundlerResult};

use super::paths::{collection_root, join_archive_name, to_archive_name};

/// Extension of files picked up from source directories
pub const SOURCE_EXTENSION: &str = "py";

/// A source directory that contributed nothing, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a collection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectOutcome {
    pub entries: Vec<SourceEntry>,
    pub skipped: Vec<SkippedSource>,
}

impl CollectOutcome {
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.source_path.clone()).collect()
    }
}

pub struct FileCollector<'a> {
    fs: &'a dyn FileSystem,
    matcher: &'a dyn PatternMatcher,
    logger: &'a dyn BuildLogger,
}

impl<'a> FileCollector<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        matcher: &'a dyn PatternMatcher,
        logger: &'a dyn BuildLogger,
    ) -> Self {
        Self {
            fs,
            matcher,
            logger,
        }
    }

    /// Collect every source file beneath `source_dirs`.
    ///
    /// Directories are visited in the given order, files within a directory
    /// in lexicographic order. A missing directory is skipped with a warning.
    pub fn collect(
        &self,
        source_dirs: &[PathBuf],
        excludes: &[ExcludeSpec],
    ) -> BundlerResult<CollectOutcome> {
        if source_dirs.is_empty() {
            return Err(BundlerError::invalid(
                "at least one source directory is required",
            ));
        }

        // A repeated archive name keeps its first position and takes the later source.
        let mut acc: EntrySet<SourceEntry> = EntrySet::new();
        let mut skipped = Vec::new();

        for dir in source_dirs {
            if !self.fs.is_dir(dir) {
                let reason = if self.fs.exists(dir) {
                    "not a directory"
                } else {
                    "does not exist"
                };
                self.logger.warn(&format!(
                    "Package path {}: {}",
                    reason,
                    dir.display()
                ));
                skipped.push(SkippedSource {
                    path: dir.clone(),
                    reason: reason.to_string(),
                });
                continue;
            }

            let prefix = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            match self.collect_tree(dir, &prefix, excludes) {
                Ok(entries) => acc.extend(entries),
                Err(err) => {
                    self.logger
                        .warn(&format!("Failed to read {}: {}", dir.display(), err));
                    skipped.push(SkippedSource {
                        path: dir.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(CollectOutcome {
            entries: acc.into_vec(),
            skipped,
        })
    }

    /// Collect the source files of one directory under an explicit archive
    /// prefix. Excludes without their own root are evaluated against the
    /// directory's parent.
    pub fn collect_tree(
        &self,
        dir: &Path,
        archive_prefix: &str,
        excludes: &[ExcludeSpec],
    ) -> BundlerResult<Vec<SourceEntry>> {
        let fallback_root = collection_root(dir);
        let mut entries = Vec::new();

        for file in self.fs.walk_files(dir)? {
            if !has_source_extension(&file) {
                continue;
            }
            if self.is_excluded(&file, excludes, fallback_root) {
                self.logger
                    .trace(&format!("Excluded file: {} (matched pattern)", file.display()));
                continue;
            }
            let relative = file.strip_prefix(dir).unwrap_or(&file);
            let archive_name = join_archive_name(archive_prefix, &to_archive_name(relative));
            self.logger
                .trace(&format!("Found file: {} -> {}", file.display(), archive_name));
            entries.push(SourceEntry::new(file, archive_name));
        }

        Ok(entries)
    }

    /// True if the regular file `file` matches any exclude.
    pub fn is_excluded(&self, file: &Path, excludes: &[ExcludeSpec], fallback_root: &Path) -> bool {
        // Consecutive specs sharing a root are matched together so `!`
        // re-includes apply to the patterns before them.
        let mut groups: Vec<(&Path, Vec<String>)> = Vec::new();
        for spec in excludes {
            let root = spec.root_for(file, fallback_root);
            match groups.last_mut() {
                Some((last_root, patterns)) if *last_root == root => {
                    patterns.push(spec.pattern.clone())
                }
                _ => groups.push((root, vec![spec.pattern.clone()])),
            }
        }

        groups
            .iter()
            .any(|(root, patterns)| self.matcher.matches(file, false, patterns, root))
    }
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == SOURCE_EXTENSION)
        .unwrap_or(false)
}
