//! Log entry structure

use super::caller::CallerLocation;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub logger: String,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so one call always produces exactly one physical line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(logger: impl Into<String>, level: LogLevel, message: &str) -> Self {
        Self {
            logger: logger.into(),
            level,
            message: Self::sanitize_message(message),
            timestamp: Local::now(),
            file: None,
            line: None,
        }
    }

    pub fn with_caller(mut self, caller: Option<CallerLocation>) -> Self {
        if let Some(caller) = caller {
            self.file = Some(caller.file);
            self.line = Some(caller.line);
        }
        self
    }

    /// Render the entry without its trailing newline
    ///
    /// `2025-01-08 10:30:45.123 [root] INFO: - src/main.rs:12 - Hello, World`
    pub fn format_line(&self, timestamp_format: &TimestampFormat) -> String {
        let timestamp = timestamp_format.format(&self.timestamp);
        match (self.file, self.line) {
            (Some(file), Some(line)) => format!(
                "{} [{}] {} - {}:{} - {}",
                timestamp,
                self.logger,
                self.level.tag(),
                file,
                line,
                self.message
            ),
            _ => format!(
                "{} [{}] {} {}",
                timestamp,
                self.logger,
                self.level.tag(),
                self.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_without_caller() {
        let entry = LogEntry::new("root", LogLevel::Info, "Hello, World");
        let line = entry.format_line(&TimestampFormat::Standard);
        assert!(line.ends_with(" [root] INFO: Hello, World"), "{}", line);
    }

    #[test]
    fn test_format_with_caller() {
        let entry = LogEntry::new("svc", LogLevel::Warn, "disk low").with_caller(Some(
            CallerLocation {
                file: "src/main.rs",
                line: 42,
            },
        ));
        let line = entry.format_line(&TimestampFormat::UnixMillis);
        assert!(
            line.ends_with(" [svc] ***WARN***: - src/main.rs:42 - disk low"),
            "{}",
            line
        );
    }

    #[test]
    fn test_sanitize_message() {
        let entry = LogEntry::new("root", LogLevel::Error, "a\nb\rc\td");
        assert_eq!(entry.message, "a\\nb\\rc\\td");
        assert!(!entry.format_line(&TimestampFormat::Standard).contains('\n'));
    }

    #[test]
    fn test_missing_caller_keeps_plain_layout() {
        let entry = LogEntry::new("root", LogLevel::Debug, "x").with_caller(None);
        assert!(entry.file.is_none());
        assert!(entry.line.is_none());
    }
}
