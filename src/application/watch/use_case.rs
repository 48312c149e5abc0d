//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::domain::ports::{BuildLogger, FileSystem, PatternMatcher};
use crate::error::BundlerResult;

use super::event::{WatchEvent, WatchOptions, SLEEP_SLICE};
use super::state::WatchState;
use super::tracker::{ChangeSet, ChangeTracker, Snapshot};

/// Watch Use Case
///
/// Polls the collected sources and calls the rebuild callback whenever
/// they change. Single threaded; the interval sleep is the only blocking
/// point and it is cut short when the running flag clears.
pub struct WatchUseCase<'a> {
    options: WatchOptions,
    tracker: ChangeTracker<'a>,
    logger: &'a dyn BuildLogger,
}

impl<'a> WatchUseCase<'a> {
    pub fn new(
        options: WatchOptions,
        fs: &'a dyn FileSystem,
        matcher: &'a dyn PatternMatcher,
        logger: &'a dyn BuildLogger,
    ) -> Self {
        Self {
            options,
            tracker: ChangeTracker::new(fs, matcher, logger),
            logger,
        }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Start watching (blocking)
    ///
    /// Runs the initial build, then polls until `running` is cleared. A
    /// failing rebuild is reported and the loop continues.
    pub fn start<R, E>(
        &self,
        running: Arc<AtomicBool>,
        mut rebuild: R,
        on_event: E,
    ) -> BundlerResult<()>
    where
        R: FnMut() -> BundlerResult<()>,
        E: Fn(WatchEvent),
    {
        let is_running = || running.load(Ordering::SeqCst);
        let mut state = WatchState::Init;
        let mut snapshot = Snapshot::new();

        while !state.is_terminal() {
            let mut changed = false;
            match state {
                WatchState::Init => {
                    on_event(WatchEvent::WatchStarted {
                        watching: self
                            .options
                            .source_dirs
                            .iter()
                            .map(|p| p.display().to_string())
                            .collect(),
                        interval_secs: self.options.interval.as_secs_f64(),
                    });
                    self.logger.info(&format!(
                        "Watching for changes (interval={:.2}s)... Press Ctrl+C to stop.",
                        self.options.interval.as_secs_f64()
                    ));
                    snapshot = self.tracker.snapshot(&self.options);
                    self.run_rebuild(&mut rebuild, &on_event);
                }
                WatchState::Polling => self.sleep_interval(&running),
                WatchState::Rescan => {
                    let fresh = self.tracker.snapshot(&self.options);
                    let changes = ChangeSet::between(&snapshot, &fresh);
                    if !changes.is_empty() {
                        self.logger.info(&format!(
                            "Detected {} changed file(s). Rebuilding...",
                            changes.len()
                        ));
                        for path in changes.added.iter().chain(&changes.modified) {
                            self.logger.debug(&format!("Changed: {}", path.display()));
                        }
                        on_event(WatchEvent::FilesChanged {
                            added: changes.added.len(),
                            modified: changes.modified.len(),
                            removed: changes.removed.len(),
                        });
                        changed = true;
                    }
                    snapshot = fresh;
                }
                WatchState::Rebuild => {
                    self.run_rebuild(&mut rebuild, &on_event);
                    snapshot = self.tracker.snapshot(&self.options);
                }
                WatchState::Stopped => {}
            }
            state = state.next(is_running(), changed);
        }

        self.logger.info("Watch stopped.");
        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn run_rebuild<R, E>(&self, rebuild: &mut R, on_event: &E)
    where
        R: FnMut() -> BundlerResult<()>,
        E: Fn(WatchEvent),
    {
        on_event(WatchEvent::RebuildStarted);
        match rebuild() {
            Ok(()) => on_event(WatchEvent::RebuildComplete),
            Err(err) => {
                self.logger.error(&format!("Rebuild failed: {}", err));
                on_event(WatchEvent::RebuildFailed {
                    message: err.to_string(),
                });
            }
        }
    }

    fn sleep_interval(&self, running: &AtomicBool) {
        let deadline = Instant::now() + self.options.interval;
        while running.load(Ordering::SeqCst) {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep((deadline - now).min(SLEEP_SLICE));
        }
    }
}
