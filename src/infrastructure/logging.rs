//! `tracing` backed logger and subscriber setup

use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::ports::{BuildLogger, LogLevel};

/// Forwards build diagnostics to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl BuildLogger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => tracing::trace!("{}", message),
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }
    }
}

pub fn to_tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install the global stderr subscriber.
///
/// Only the first call has an effect.
pub fn init_logging(level: LogLevel, ansi: bool) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_max_level(to_tracing_level(level))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}
