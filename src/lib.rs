//! # Rust Logger Registry
//!
//! A leveled, named logging facade. Independent modules obtain their own
//! logger from a shared registry while the hosting application keeps central
//! control over verbosity, colors and output destination.
//!
//! ## Features
//!
//! - **Named loggers**: `get(name)` returns the same shared instance every time
//! - **Root logger**: free functions (`info`, `warn`, ...) work with no setup
//! - **Runtime control**: level, colors, output, caller depth and timestamp
//!   format can change at any moment through any holder
//! - **Thread safe**: every line reaches its sink in a single locked write
//!
//! ```
//! use rust_logger_registry::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = get("github.com/xxx/xxx");
//! logger.set_colorful(false);
//! logger.set_output(sink.clone());
//!
//! logger.info(format_args!("Hello, {}", "World"));
//! assert!(sink.contents().contains("[github.com/xxx/xxx] INFO:"));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputTarget,
        Registry, RegistryConfig, Result, TimestampFormat,
    };
    pub use crate::global::{get, register, root, set_log_file_and_line};
    pub use crate::sinks::{ConsoleSink, MemorySink};
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
}

#[cfg(feature = "file")]
pub use crate::sinks::FileSink;
pub use crate::sinks::{ConsoleSink, MemorySink};
pub use crate::core::{
    CallerLocation, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Output, OutputTarget, Registry, RegistryConfig, Result, TimestampFormat,
    DEFAULT_CALL_STACK_DEPTH, MAX_CALL_STACK_DEPTH, ROOT_LOGGER_NAME,
};
pub use crate::global::{
    configure, debug, error, error_from, fatal, fatal_from, get, info, log, log_file_and_line,
    register, root, set_call_stack_depth, set_colorful, set_level, set_log_file_and_line,
    set_output, set_timestamp_format, warn,
};
