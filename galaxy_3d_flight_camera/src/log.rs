//! Logging for the flight camera
//!
//! Same model as the Galaxy3D engine logger:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - A process-wide registry (`Log`) guarded by RwLock
//! - File and line information for detailed ERROR logs
//!
//! The camera runs inside the host's frame loop, so per-frame events are
//! logged at Trace and filtered out by the default minimum severity (Info).

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: OnceLock<RwLock<LogSeverity>> = OnceLock::new();

/// Logger trait for custom logging implementations
///
/// Implement this trait to forward camera logs to the host's own log sink.
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_flight_camera::flight::log::{Logger, LogEntry};
///
/// struct HostLogger;
///
/// impl Logger for HostLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.source, entry.message);
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

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "flight::Camera", "flight::Orientation")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame details (projection rebuilds, clamps)
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

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
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

/// Process-wide log registry used by the `camera_*!` macros.
pub struct Log;

impl Log {
    fn logger() -> &'static RwLock<Box<dyn Logger>> {
        LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
    }

    fn min_severity_lock() -> &'static RwLock<LogSeverity> {
        MIN_SEVERITY.get_or_init(|| RwLock::new(LogSeverity::Info))
    }

    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = Self::logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Set the lowest severity forwarded to the logger (default: Info)
    pub fn set_min_severity(severity: LogSeverity) {
        if let Ok(mut lock) = Self::min_severity_lock().write() {
            *lock = severity;
        }
    }

    /// Lowest severity currently forwarded to the logger
    pub fn min_severity() -> LogSeverity {
        Self::min_severity_lock()
            .read()
            .map(|lock| *lock)
            .unwrap_or(LogSeverity::Info)
    }

    /// Whether an entry of this severity would reach the logger
    pub fn enabled(severity: LogSeverity) -> bool {
        severity >= Self::min_severity()
    }

    /// Log a message without file:line information
    ///
    /// Used by macros like camera_info!, camera_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if !Self::enabled(severity) {
            return;
        }
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log a message with file:line information (used by camera_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if !Self::enabled(severity) {
            return;
        }
        if let Ok(lock) = Self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (per-frame detail, filtered out by default)
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_flight_camera::camera_trace;
/// camera_trace!("flight::Camera", "Projection rebuilt (fov {})", 45.0);
/// ```
#[macro_export]
macro_rules! camera_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::flight::log::Log::log(
            $crate::flight::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
#[macro_export]
macro_rules! camera_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::flight::log::Log::log(
            $crate::flight::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
#[macro_export]
macro_rules! camera_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::flight::log::Log::log(
            $crate::flight::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! camera_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::flight::log::Log::log(
            $crate::flight::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_flight_camera::camera_error;
/// camera_error!("flight::CameraDesc", "Rejected descriptor: {}", "near_plane <= 0");
/// ```
#[macro_export]
macro_rules! camera_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::flight::log::Log::log_detailed(
            $crate::flight::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
