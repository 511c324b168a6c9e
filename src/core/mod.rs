//! Core logger types

pub mod caller;
pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod timestamp;

pub use caller::{CallerLocation, DEFAULT_CALL_STACK_DEPTH, MAX_CALL_STACK_DEPTH};
pub use config::{LoggerConfig, OutputTarget, RegistryConfig};
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, Output, ROOT_LOGGER_NAME};
pub use metrics::LoggerMetrics;
pub use registry::Registry;
pub use timestamp::TimestampFormat;
