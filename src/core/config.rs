//! Registry configuration
//!
//! Lets a hosting application describe verbosity, colors and destinations of
//! every named logger in one JSON document:
//!
//! ```json
//! {
//!   "file_and_line": false,
//!   "loggers": {
//!     "root": { "level": "info" },
//!     "github.com/xxx/xxx": { "level": "error", "colorful": false, "output": "stderr" }
//!   }
//! }
//! ```

use super::{
    caller::set_log_file_and_line,
    error::{LoggerError, Result},
    log_level::LogLevel,
    logger::{Logger, Output},
    registry::Registry,
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Where a configured logger writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTarget {
    Stdout,
    Stderr,
    File { path: PathBuf },
}

impl OutputTarget {
    pub fn open(&self) -> Result<Output> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(ConsoleSink::stdout())),
            OutputTarget::Stderr => Ok(Box::new(ConsoleSink::stderr())),
            #[cfg(feature = "file")]
            OutputTarget::File { path } => Ok(Box::new(crate::sinks::FileSink::new(path)?)),
            #[cfg(not(feature = "file"))]
            OutputTarget::File { path } => Err(LoggerError::config(
                "output",
                format!(
                    "file output '{}' requires the `file` feature",
                    path.display()
                ),
            )),
        }
    }
}

/// Overrides for one named logger; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: Option<LogLevel>,
    pub colorful: Option<bool>,
    pub call_stack_depth: Option<i64>,
    pub timestamp_format: Option<TimestampFormat>,
    pub output: Option<OutputTarget>,
}

impl LoggerConfig {
    fn apply_to(&self, logger: &Logger, output: Option<Output>) {
        if let Some(level) = self.level {
            logger.set_level(level);
        }
        if let Some(colorful) = self.colorful {
            logger.set_colorful(colorful);
        }
        if let Some(depth) = self.call_stack_depth {
            logger.set_call_stack_depth(depth);
        }
        if let Some(ref format) = self.timestamp_format {
            logger.set_timestamp_format(format.clone());
        }
        if let Some(output) = output {
            logger.set_boxed_output(output);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Process-wide file name and line number switch
    pub file_and_line: bool,
    pub loggers: BTreeMap<String, LoggerConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            file_and_line: true,
            loggers: BTreeMap::new(),
        }
    }
}

impl RegistryConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::config(
                "registry",
                format!("cannot read '{}': {}", path.display(), e),
            )
        })?;
        Self::from_json_str(&json)
    }

    /// Apply to `registry`
    ///
    /// Timestamp patterns are validated and every output is opened before
    /// anything changes, so a bad entry leaves the registry as it was.
    pub fn apply(&self, registry: &Registry) -> Result<()> {
        let mut outputs = BTreeMap::new();
        for (name, logger_config) in &self.loggers {
            if let Some(ref format) = logger_config.timestamp_format {
                format.validate().map_err(|e| {
                    LoggerError::config(format!("logger '{}'", name), e.to_string())
                })?;
            }
            if let Some(ref target) = logger_config.output {
                outputs.insert(name.as_str(), target.open()?);
            }
        }

        set_log_file_and_line(self.file_and_line);
        for (name, logger_config) in &self.loggers {
            let logger = registry.get(name);
            logger_config.apply_to(&logger, outputs.remove(name.as_str()));
        }
        Ok(())
    }
}
