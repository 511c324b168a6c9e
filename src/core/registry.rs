//! Process-wide name to logger mapping
//!
//! Libraries call [`Registry::get`] with their full name to obtain a logger;
//! the hosting application configures the same instance through the same name.

use super::{
    config::RegistryConfig,
    error::Result,
    logger::{Logger, ROOT_LOGGER_NAME},
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

fn normalize(name: &str) -> &str {
    if name.is_empty() {
        ROOT_LOGGER_NAME
    } else {
        name
    }
}

/// Get-or-create mapping from logger name to a shared [`Logger`]
///
/// # Example
///
/// ```
/// use rust_logger_registry::prelude::*;
/// use std::sync::Arc;
///
/// let registry = Registry::new();
/// let library = registry.get("github.com/xxx/xxx");
/// let application = registry.get("github.com/xxx/xxx");
///
/// application.set_level(LogLevel::Error);
/// assert!(Arc::ptr_eq(&library, &application));
/// assert_eq!(library.level(), LogLevel::Error);
/// ```
#[derive(Debug)]
pub struct Registry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    /// Create a registry holding only the root logger
    #[must_use]
    pub fn new() -> Self {
        let mut loggers = HashMap::new();
        loggers.insert(
            ROOT_LOGGER_NAME.to_string(),
            Arc::new(Logger::simple(ROOT_LOGGER_NAME)),
        );
        Self {
            loggers: RwLock::new(loggers),
        }
    }

    /// The process-wide registry, created with its root logger on first access
    pub fn global() -> &'static Registry {
        GLOBAL_REGISTRY.get_or_init(Registry::new)
    }

    /// Look up `name`, creating and registering a [`Logger::simple`] if absent
    ///
    /// Repeated calls with the same name return the same instance.
    pub fn get(&self, name: &str) -> Arc<Logger> {
        let name = normalize(name);
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::simple(name))),
        )
    }

    /// Insert or replace the slot keyed by the logger's name
    ///
    /// Returns the logger previously stored under that name. Holders of the
    /// old instance can keep using it, but `get` no longer returns it.
    pub fn register(&self, logger: impl Into<Arc<Logger>>) -> Option<Arc<Logger>> {
        let logger = logger.into();
        self.loggers
            .write()
            .insert(logger.name().to_string(), logger)
    }

    pub fn root(&self) -> Arc<Logger> {
        self.get(ROOT_LOGGER_NAME)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(normalize(name))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Apply a configuration, creating any logger it names
    ///
    /// Also sets the process-wide file/line switch.
    pub fn apply_config(&self, config: &RegistryConfig) -> Result<()> {
        config.apply(self)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
