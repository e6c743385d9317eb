//! Logging facade used by every layer of the viewport.
//!
//! Nothing is logged until a host installs a [`Logger`] (the browser start
//! hook installs the console logger). Until then entries are never built and
//! timestamps come from a counter, so native hosts and tests pay nothing.

use derive_more::Display;
use once_cell::sync::OnceCell;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

/// Layer and part of the panel a message comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: String) -> Self {
        Self { timestamp: get_time_provider().current_timestamp(), level, component, message }
    }
}

pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for log entries.
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    /// Lowest level this sink keeps.
    fn min_level(&self) -> LogLevel {
        LogLevel::Trace
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }
}

static GLOBAL_LOGGER: OnceCell<Box<dyn Logger>> = OnceCell::new();
static GLOBAL_TIME_PROVIDER: OnceCell<Box<dyn TimeProvider>> = OnceCell::new();

/// Install the global logger. Only the first call wins.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = GLOBAL_LOGGER.set(logger);
}

/// Install the global clock. Only the first call wins.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&Silent)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER.get().map(|provider| provider.as_ref()).unwrap_or(&TickCounter)
}

/// Format and hand over an entry, skipping the formatting entirely when the
/// installed logger would drop it. Backs the `log_*!` macros.
pub fn emit(level: LogLevel, component: LogComponent, args: fmt::Arguments<'_>) {
    let logger = get_logger();
    if logger.enabled(level) {
        logger.log(LogEntry::new(level, component, args.to_string()));
    }
}

struct Silent;

impl Logger for Silent {
    fn log(&self, _entry: LogEntry) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Monotonic tick used until a wall clock is installed.
struct TickCounter;

impl TimeProvider for TickCounter {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TICKS: AtomicU64 = AtomicU64::new(0);
        TICKS.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{}", timestamp)
    }
}

// Trace, debug and info vanish from release builds.

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Trace,
                $component,
                format_args!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Debug,
                $component,
                format_args!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit(
                $crate::domain::logging::LogLevel::Info,
                $component,
                format_args!($($arg)*),
            );
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Warn,
            $component,
            format_args!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit(
            $crate::domain::logging::LogLevel::Error,
            $component,
            format_args!($($arg)*),
        )
    };
}
