//! Logging macros for ergonomic log message formatting.
//!
//! The template is forwarded through `format_args!`, so a call filtered out by
//! the logger's level never renders its arguments. `{}` covers what `%s` and
//! `%d` do elsewhere; `{:?}` and `{:#?}` render the full value.
//!
//! # Examples
//!
//! ```
//! use rust_logger_registry::prelude::*;
//! use rust_logger_registry::info;
//!
//! let logger = get("github.com/xxx/xxx");
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logger_registry::prelude::*;
/// # let logger = Logger::simple("doc");
/// use rust_logger_registry::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message (tagged `TRACE:`).
///
/// ```
/// # use rust_logger_registry::prelude::*;
/// # let logger = Logger::simple("doc");
/// use rust_logger_registry::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. Fatal lines ignore the level filter.
///
/// ```
/// # use rust_logger_registry::prelude::*;
/// # let logger = Logger::simple("doc");
/// use rust_logger_registry::fatal;
/// logger.set_level(LogLevel::Fatal);
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
