//! Watch Use Case
//!
//! Polling rebuild loop:
//! - `WatchUseCase` - drives the state machine and calls the rebuild
//!   callback
//! - `ChangeTracker` - snapshots source modification times through the
//!   file collector
//! - `WatchEvent` - events emitted during the watch, printable as NDJSON
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(packages, output);
//! let use_case = WatchUseCase::new(options, &fs, &matcher, &logger);
//! use_case.start(running, || build(), |event| { ... });
//! ```

mod event;
mod state;
mod tracker;
mod use_case;


pub use event::{WatchEvent, WatchOptions, DEFAULT_INTERVAL, SLEEP_SLICE};
pub use state::WatchState;
pub use tracker::{ChangeSet, ChangeTracker, Snapshot};
pub use use_case::WatchUseCase;
