//! Watch event types and options

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::value_objects::ExcludeSpec;

/// Poll interval used when none is configured
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on one uninterrupted sleep, so cancellation is noticed
/// promptly.
pub const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Package directories whose sources are polled
    pub source_dirs: Vec<PathBuf>,
    /// Build output; never treated as a source
    pub output: PathBuf,
    pub interval: Duration,
    pub excludes: Vec<ExcludeSpec>,
    /// Individual files also polled (includes, merge source)
    pub extra_paths: Vec<PathBuf>,
}

impl WatchOptions {
    pub fn new(source_dirs: Vec<PathBuf>, output: PathBuf) -> Self {
        Self {
            source_dirs,
            output,
            interval: DEFAULT_INTERVAL,
            excludes: Vec::new(),
            extra_paths: Vec::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Interval in (possibly fractional) seconds; non-positive values fall
    /// back to the default.
    pub fn with_interval_secs(self, secs: f64) -> Self {
        let interval = if secs.is_finite() && secs > 0.0 {
            Duration::from_secs_f64(secs)
        } else {
            DEFAULT_INTERVAL
        };
        self.with_interval(interval)
    }

    pub fn with_excludes(mut self, excludes: Vec<ExcludeSpec>) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn with_extra_paths(mut self, extra_paths: Vec<PathBuf>) -> Self {
        self.extra_paths = extra_paths;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        watching: Vec<String>,
        interval_secs: f64,
    },
    /// Sources differ from the previous poll
    FilesChanged {
        added: usize,
        modified: usize,
        removed: usize,
    },
    RebuildStarted,
    RebuildComplete,
    /// The loop keeps running after a failed rebuild
    RebuildFailed { message: String },
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
