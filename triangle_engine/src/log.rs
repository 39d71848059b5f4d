//! Internal logging system for the Triangle engine
//!
//! This module provides a small logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for detailed ERROR logs
//!
//! Timestamps use `chrono::Local`, which also resolves inside a browser
//! (wasm32) where `std::time::SystemTime::now()` is unavailable.

use colored::*;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to redirect engine logs (browser console, file, test capture, ...).
///
/// # Example
///
/// ```no_run
/// use triangle_engine::triangle::log::{Logger, LogEntry};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{} {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Local time when the log was created
    pub timestamp: DateTime<Local>,

    /// Source module (e.g., "triangle::program", "triangle::webgl")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

impl LogEntry {
    /// Format the entry without colors
    ///
    /// Format:
    /// - Normal: `[timestamp] [SEVERITY] [source] message`
    /// - Detailed: `[timestamp] [SEVERITY] [source] message (file:line)`
    pub fn to_plain_string(&self) -> String {
        let timestamp = self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
        match (self.file, self.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                self.severity.label(),
                self.source,
                self.message,
                file,
                line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp,
                self.severity.label(),
                self.source,
                self.message
            ),
        }
    }
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information (per-frame calls)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used in formatted output
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger implementation using colored console output
///
/// Colors:
/// - Trace: bright_black
/// - Debug: cyan
/// - Info: green
/// - Warn: yellow
/// - Error: red + bold
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => entry.severity.label().bright_black(),
            LogSeverity::Debug => entry.severity.label().cyan(),
            LogSeverity::Info => entry.severity.label().green(),
            LogSeverity::Warn => entry.severity.label().yellow(),
            LogSeverity::Error => entry.severity.label().red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically filtered out)
///
/// # Example
///
/// ```no_run
/// # use triangle_engine::engine_trace;
/// engine_trace!("triangle::renderer", "drawArrays({})", 3);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::triangle::Engine::log(
            $crate::triangle::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::triangle::Engine::log(
            $crate::triangle::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// # use triangle_engine::engine_info;
/// engine_info!("triangle::program", "Program linked with {} attributes", 2);
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::triangle::Engine::log(
            $crate::triangle::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::triangle::Engine::log(
            $crate::triangle::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::triangle::Engine::log_detailed(
            $crate::triangle::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR message and build an `Error::BackendError` with the same text
///
/// Intended for `map_err` / `ok_or_else` on host calls.
///
/// # Example
///
/// ```no_run
/// # use triangle_engine::engine_err;
/// # fn host() -> Result<(), String> { Ok(()) }
/// # fn run() -> triangle_engine::triangle::Result<()> {
/// host().map_err(|e| engine_err!("triangle::webgl", "getContext failed: {:?}", e))?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::triangle::Engine::log_detailed(
            $crate::triangle::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::triangle::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return early with `Err(Error::BackendError)`
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
