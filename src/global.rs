//! Free-standing functions delegating to the root logger
//!
//! The root logger lives in [`Registry::global`] and exists before the first
//! call, so these work without any setup. Registering a new `"root"` logger
//! redirects every function here to it.

use crate::core::{LogLevel, Logger, Registry, RegistryConfig, Result, TimestampFormat};
use std::error::Error as StdError;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

pub use crate::core::caller::{log_file_and_line, set_log_file_and_line};

/// The root logger currently registered
pub fn root() -> Arc<Logger> {
    Registry::global().root()
}

/// Get a logger from the global registry, creating a simple one if absent
///
/// Libraries should call this with their full name so the application can
/// control their output.
pub fn get(name: &str) -> Arc<Logger> {
    Registry::global().get(name)
}

/// Register a logger in the global registry, replacing any with the same name
pub fn register(logger: impl Into<Arc<Logger>>) -> Option<Arc<Logger>> {
    Registry::global().register(logger)
}

/// Apply a configuration to the global registry
pub fn configure(config: &RegistryConfig) -> Result<()> {
    Registry::global().apply_config(config)
}

#[track_caller]
pub fn log(level: LogLevel, message: impl fmt::Display) {
    root().log(level, message);
}

#[track_caller]
pub fn debug(message: impl fmt::Display) {
    root().debug(message);
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    root().info(message);
}

#[track_caller]
pub fn warn(message: impl fmt::Display) {
    root().warn(message);
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    root().error(message);
}

#[track_caller]
pub fn fatal(message: impl fmt::Display) {
    root().fatal(message);
}

#[track_caller]
pub fn error_from(err: &dyn StdError) {
    root().error_from(err);
}

#[track_caller]
pub fn fatal_from(err: &dyn StdError) {
    root().fatal_from(err);
}

pub fn set_level(level: LogLevel) {
    root().set_level(level);
}

pub fn set_colorful(colorful: bool) {
    root().set_colorful(colorful);
}

pub fn set_output(output: impl Write + Send + 'static) {
    root().set_output(output);
}

pub fn set_call_stack_depth(depth: i64) {
    root().set_call_stack_depth(depth);
}

pub fn set_timestamp_format(format: TimestampFormat) {
    root().set_timestamp_format(format);
}
