//! Staleness Detector
//!
//! Decides whether the output archive has to be rebuilt by comparing
//! modification times. A source file deleted since the last build is only
//! noticed when some other source changed too.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::{BuildLogger, FileSystem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    Forced,
    OutputMissing,
    SourceNewer(PathBuf),
    UpToDate,
}

/// Verdict of one staleness check; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StalenessRecord {
    pub output_mtime: Option<SystemTime>,
    pub newest_source_mtime: Option<SystemTime>,
    pub reason: StaleReason,
}

impl StalenessRecord {
    pub fn is_stale(&self) -> bool {
        self.reason != StaleReason::UpToDate
    }
}

pub struct StalenessDetector<'a> {
    fs: &'a dyn FileSystem,
    logger: &'a dyn BuildLogger,
}

impl<'a> StalenessDetector<'a> {
    pub fn new(fs: &'a dyn FileSystem, logger: &'a dyn BuildLogger) -> Self {
        Self { fs, logger }
    }

    pub fn check(&self, output: &Path, sources: &[PathBuf], force: bool) -> StalenessRecord {
        if force {
            self.logger.debug("Rebuild forced");
            return StalenessRecord {
                output_mtime: None,
                newest_source_mtime: None,
                reason: StaleReason::Forced,
            };
        }

        let output_mtime = match self.fs.modified(output) {
            Ok(mtime) if self.fs.is_file(output) => mtime,
            _ => {
                self.logger
                    .debug(&format!("Output {} does not exist", output.display()));
                return StalenessRecord {
                    output_mtime: None,
                    newest_source_mtime: None,
                    reason: StaleReason::OutputMissing,
                };
            }
        };

        let mut newest: Option<(SystemTime, &PathBuf)> = None;
        for source in sources {
            match self.fs.modified(source) {
                Ok(mtime) => {
                    if newest.map(|(t, _)| mtime > t).unwrap_or(true) {
                        newest = Some((mtime, source));
                    }
                }
                Err(err) => self.logger.trace(&format!(
                    "Cannot stat {}: {}",
                    source.display(),
                    err
                )),
            }
        }

        let reason = match newest {
            Some((mtime, path)) if mtime > output_mtime => {
                self.logger
                    .debug(&format!("Source {} is newer than output", path.display()));
                StaleReason::SourceNewer(path.clone())
            }
            _ => StaleReason::UpToDate,
        };

        StalenessRecord {
            output_mtime: Some(output_mtime),
            newest_source_mtime: newest.map(|(t, _)| t),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NoopLogger;
    use crate::infrastructure::fs::MockFileSystem;
    use std::time::Duration;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn force_is_always_stale() {
        let fs = MockFileSystem::new();
        fs.add_file_at("/out.pyz", "", at(100));
        let record = StalenessDetector::new(&fs, &NoopLogger).check(Path::new("/out.pyz"), &[], true);
        assert_eq!(record.reason, StaleReason::Forced);
        assert!(record.is_stale());
    }

    #[test]
    fn missing_output_is_stale() {
        let fs = MockFileSystem::new();
        let record = StalenessDetector::new(&fs, &NoopLogger).check(Path::new("/out.pyz"), &[], false);
        assert_eq!(record.reason, StaleReason::OutputMissing);
    }

    #[test]
    fn newer_source_is_stale() {
        let fs = MockFileSystem::new();
        fs.add_file_at("/out.pyz", "", at(100));
        fs.add_file_at("/pkg/a.py", "", at(50));
        fs.add_file_at("/pkg/b.py", "", at(150));
        let sources = vec![PathBuf::from("/pkg/a.py"), PathBuf::from("/pkg/b.py")];

        let record =
            StalenessDetector::new(&fs, &NoopLogger).check(Path::new("/out.pyz"), &sources, false);

        assert_eq!(record.reason, StaleReason::SourceNewer(PathBuf::from("/pkg/b.py")));
        assert_eq!(record.newest_source_mtime, Some(at(150)));
    }

    #[test]
    fn equal_or_older_sources_are_up_to_date() {
        let fs = MockFileSystem::new();
        fs.add_file_at("/out.pyz", "", at(100));
        fs.add_file_at("/pkg/a.py", "", at(100));
        let sources = vec![PathBuf::from("/pkg/a.py"), PathBuf::from("/pkg/gone.py")];

        let record =
            StalenessDetector::new(&fs, &NoopLogger).check(Path::new("/out.pyz"), &sources, false);

        assert!(!record.is_stale());
        assert_eq!(record.output_mtime, Some(at(100)));
    }
}
