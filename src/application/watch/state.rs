//! Watcher state machine
//!
//! ```text
//! Init -> Polling -> Rescan -> Polling
//!                          \-> Rebuild -> Polling
//! any state -> Stopped (on cancellation)
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Initial build not yet run
    Init,
    /// Sleeping out the interval
    Polling,
    /// Comparing a fresh snapshot against the last one
    Rescan,
    Rebuild,
    /// Terminal
    Stopped,
}

impl WatchState {
    /// State after the current one completes. `changed` only matters for
    /// `Rescan`.
    pub fn next(self, running: bool, changed: bool) -> WatchState {
        if !running {
            return WatchState::Stopped;
        }
        match self {
            WatchState::Init => WatchState::Polling,
            WatchState::Polling => WatchState::Rescan,
            WatchState::Rescan if changed => WatchState::Rebuild,
            WatchState::Rescan => WatchState::Polling,
            WatchState::Rebuild => WatchState::Polling,
            WatchState::Stopped => WatchState::Stopped,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == WatchState::Stopped
    }
}
