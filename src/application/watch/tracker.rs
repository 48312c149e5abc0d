//! Source snapshots and the differences between them

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::{BuildLogger, FileSystem, PatternMatcher};
use crate::domain::services::FileCollector;

use super::event::WatchOptions;

/// Modification time of every watched file
pub type Snapshot = BTreeMap<PathBuf, SystemTime>;

/// Files that differ between two snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<PathBuf>,
    pub modified: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

impl ChangeSet {
    pub fn between(old: &Snapshot, new: &Snapshot) -> Self {
        let mut changes = ChangeSet::default();
        for (path, mtime) in new {
            match old.get(path) {
                None => changes.added.push(path.clone()),
                Some(previous) if mtime > previous => changes.modified.push(path.clone()),
                Some(_) => {}
            }
        }
        changes.removed = old
            .keys()
            .filter(|path| !new.contains_key(*path))
            .cloned()
            .collect();
        changes
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.removed.len()
    }
}

/// Re-runs the collector over the watched directories on every scan so
/// new files are picked up.
pub struct ChangeTracker<'a> {
    fs: &'a dyn FileSystem,
    collector: FileCollector<'a>,
    logger: &'a dyn BuildLogger,
}

impl<'a> ChangeTracker<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        matcher: &'a dyn PatternMatcher,
        logger: &'a dyn BuildLogger,
    ) -> Self {
        Self {
            fs,
            collector: FileCollector::new(fs, matcher, logger),
            logger,
        }
    }

    pub fn snapshot(&self, options: &WatchOptions) -> Snapshot {
        let mut files: Vec<PathBuf> = if options.source_dirs.is_empty() {
            Vec::new()
        } else {
            match self.collector.collect(&options.source_dirs, &options.excludes) {
                Ok(outcome) => outcome.source_paths(),
                Err(err) => {
                    self.logger
                        .warn(&format!("Could not scan watched sources: {}", err));
                    Vec::new()
                }
            }
        };
        for extra in &options.extra_paths {
            if !self.fs.is_dir(extra) {
                files.push(extra.clone());
                continue;
            }
            // Included and merged directories are bundled file by file
            match self.fs.walk_files(extra) {
                Ok(nested) => files.extend(nested),
                Err(err) => self.logger.warn(&format!(
                    "Could not scan watched directory {}: {}",
                    extra.display(),
                    err
                )),
            }
        }

        let snapshot: Snapshot = files
            .into_iter()
            .filter(|path| !is_output(path, &options.output))
            .filter_map(|path| {
                let mtime = self.fs.modified(&path).ok()?;
                Some((path, mtime))
            })
            .collect();

        self.logger.trace(&format!(
            "[watch] Checking {} files for changes",
            snapshot.len()
        ));
        snapshot
    }
}

fn is_output(path: &Path, output: &Path) -> bool {
    path == output || path.starts_with(output)
}
