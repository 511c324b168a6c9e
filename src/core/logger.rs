//! Main logger implementation

use super::{
    caller::{clamp_depth, CallerLocation, DEFAULT_CALL_STACK_DEPTH},
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use parking_lot::{Mutex, RwLock};
use std::error::Error as StdError;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Name of the default logger used by the free-standing functions
pub const ROOT_LOGGER_NAME: &str = "root";

/// Destination of formatted lines
pub type Output = Box<dyn Write + Send>;

/// A named, independently configurable emitter of leveled text lines
///
/// Loggers are shared as `Arc<Logger>`; every option can be changed through
/// `&self` and takes effect on the next emitted line.
///
/// # Example
///
/// ```
/// use rust_logger_registry::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::new("svc", LogLevel::Info, false, Some(Box::new(sink.clone())));
///
/// logger.debug("hidden");
/// logger.info(format_args!("Hello, {}", "World"));
///
/// assert!(sink.contents().contains("[svc] INFO:"));
/// assert_eq!(sink.lines().len(), 1);
/// ```
pub struct Logger {
    name: String,
    level: RwLock<LogLevel>,
    colorful: AtomicBool,
    call_stack_depth: AtomicUsize,
    timestamp_format: RwLock<TimestampFormat>,
    output: Mutex<Output>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger that is not registered anywhere
    ///
    /// An empty name becomes `"root"`, a missing output becomes stdout.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        level: LogLevel,
        colorful: bool,
        output: Option<Output>,
    ) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = ROOT_LOGGER_NAME.to_string();
        }
        let output = output.unwrap_or_else(|| Box::new(ConsoleSink::stdout()));

        Self {
            name,
            level: RwLock::new(level),
            colorful: AtomicBool::new(colorful),
            call_stack_depth: AtomicUsize::new(DEFAULT_CALL_STACK_DEPTH),
            timestamp_format: RwLock::new(TimestampFormat::default()),
            output: Mutex::new(output),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Colorful logger at Debug level writing to stdout
    #[must_use]
    pub fn simple(name: impl Into<String>) -> Self {
        Self::new(name, LogLevel::Debug, true, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn is_colorful(&self) -> bool {
        self.colorful.load(Ordering::Relaxed)
    }

    pub fn set_colorful(&self, colorful: bool) {
        self.colorful.store(colorful, Ordering::Relaxed);
    }

    /// Replace the sink; the previous one is dropped
    pub fn set_output(&self, output: impl Write + Send + 'static) {
        self.set_boxed_output(Box::new(output));
    }

    /// Same as [`Logger::set_output`] for an already boxed sink
    pub fn set_boxed_output(&self, output: Output) {
        *self.output.lock() = output;
    }

    pub fn call_stack_depth(&self) -> usize {
        self.call_stack_depth.load(Ordering::Relaxed)
    }

    /// Enable or disable the file and line annotation for this logger
    ///
    /// Zero disables it. Any positive depth reports the `#[track_caller]` call
    /// site of the level method. Values are clamped to `[0, 10]`.
    pub fn set_call_stack_depth(&self, depth: i64) {
        self.call_stack_depth
            .store(clamp_depth(depth), Ordering::Relaxed);
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        self.timestamp_format.read().clone()
    }

    /// A custom pattern chrono cannot render is written as `Standard`
    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        *self.timestamp_format.write() = format;
    }

    /// Whether a call at `level` would be written
    ///
    /// Fatal is never filtered out.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level == LogLevel::Fatal || level >= self.level()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.output.lock().flush()?;
        Ok(())
    }

    /// Emit one line at `level`
    ///
    /// The message is only rendered when the level passes the gate, so
    /// `format_args!` costs nothing for suppressed calls.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let caller = CallerLocation::resolve(self.call_stack_depth());
        let entry =
            LogEntry::new(self.name.as_str(), level, &message.to_string()).with_caller(caller);
        self.write_entry(&entry);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    /// Emit at Fatal severity regardless of the configured level
    ///
    /// This does not terminate the process.
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(LogLevel::Fatal, message);
    }

    /// Emit an error value and its source chain at Error severity
    #[track_caller]
    pub fn error_from(&self, err: &dyn StdError) {
        self.log(LogLevel::Error, ErrorChain(err));
    }

    /// Emit an error value and its source chain at Fatal severity
    #[track_caller]
    pub fn fatal_from(&self, err: &dyn StdError) {
        self.log(LogLevel::Fatal, ErrorChain(err));
    }

    /// Write one complete line under the sink lock
    ///
    /// A failing or panicking sink only bumps the dropped counter.
    fn write_entry(&self, entry: &LogEntry) {
        let body = entry.format_line(&self.timestamp_format.read());
        let line = if self.is_colorful() {
            format!(
                "\x1b[{}m{}\x1b[0m\n",
                entry.level.color_code().to_fg_str(),
                body
            )
        } else {
            let mut line = body;
            line.push('\n');
            line
        };

        let mut output = self.output.lock();
        let write_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(
            || -> std::io::Result<()> {
                output.write_all(line.as_bytes())?;
                output.flush()
            },
        ));

        match write_result {
            Ok(Ok(())) => {
                self.metrics.record_logged();
            }
            Ok(Err(_)) | Err(_) => {
                self.metrics.record_dropped();
            }
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_logger_registry::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .name("github.com/xxx/xxx")
    ///     .level(LogLevel::Error)
    ///     .colorful(false)
    ///     .output(MemorySink::new())
    ///     .build();
    /// assert_eq!(logger.level(), LogLevel::Error);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("colorful", &self.is_colorful())
            .field("call_stack_depth", &self.call_stack_depth())
            .field("timestamp_format", &self.timestamp_format())
            .finish_non_exhaustive()
    }
}

/// Renders an error followed by its `source()` chain
struct ErrorChain<'a>(&'a dyn StdError);

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {}", cause)?;
            source = cause.source();
        }
        Ok(())
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    colorful: bool,
    output: Option<Output>,
    call_stack_depth: i64,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    /// Same defaults as [`Logger::simple`]
    pub fn new() -> Self {
        Self {
            name: ROOT_LOGGER_NAME.to_string(),
            level: LogLevel::Debug,
            colorful: true,
            output: None,
            call_stack_depth: DEFAULT_CALL_STACK_DEPTH as i64,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colorful(mut self, colorful: bool) -> Self {
        self.colorful = colorful;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn call_stack_depth(mut self, depth: i64) -> Self {
        self.call_stack_depth = depth;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name, self.level, self.colorful, self.output);
        logger.set_call_stack_depth(self.call_stack_depth);
        logger.set_timestamp_format(self.timestamp_format);
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
