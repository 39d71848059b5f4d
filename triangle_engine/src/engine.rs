/// Triangle Engine - global logging slot
///
/// Rendering state (graphics context, program, buffers) is owned explicitly by
/// `RenderContext`; the only process-wide state is the logger, so every module
/// (including host backends) can report through the same sink.

use std::sync::{OnceLock, RwLock};
use chrono::Local;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger state (initialized with DefaultLogger on first use)
static LOGGER: OnceLock<RwLock<LoggerState>> = OnceLock::new();

/// Logger plus its severity filter
struct LoggerState {
    logger: Box<dyn Logger>,
    min_severity: LogSeverity,
}

impl LoggerState {
    fn new() -> Self {
        Self {
            logger: Box::new(DefaultLogger),
            min_severity: LogSeverity::Trace,
        }
    }
}

fn logger_state() -> &'static RwLock<LoggerState> {
    LOGGER.get_or_init(|| RwLock::new(LoggerState::new()))
}

// ===== PUBLIC API =====

/// Engine-wide services
///
/// # Example
///
/// ```no_run
/// use triangle_engine::triangle::{Engine, log::{Logger, LogEntry, LogSeverity}};
///
/// struct Quiet;
/// impl Logger for Quiet {
///     fn log(&self, _entry: &LogEntry) {}
/// }
///
/// Engine::set_logger(Quiet);
/// Engine::set_min_severity(LogSeverity::Warn);
/// ```
pub struct Engine;

impl Engine {
    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation (browser console,
    /// test capture, ...). The severity filter is kept.
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_state().write() {
            lock.logger = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger) and clear the severity filter
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_state().write() {
            *lock = LoggerState::new();
        }
    }

    /// Drop every entry below `severity`
    pub fn set_min_severity(severity: LogSeverity) {
        if let Ok(mut lock) = logger_state().write() {
            lock.min_severity = severity;
        }
    }

    /// Current severity filter
    pub fn min_severity() -> LogSeverity {
        logger_state()
            .read()
            .map(|lock| lock.min_severity)
            .unwrap_or(LogSeverity::Trace)
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error!, engine_err! and engine_bail!.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if let Ok(lock) = logger_state().read() {
            if severity < lock.min_severity {
                return;
            }
            lock.logger.log(&LogEntry {
                severity,
                timestamp: Local::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
