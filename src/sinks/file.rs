//! File sink implementation

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a file
///
/// The logger flushes after every line, so the buffer only batches the
/// pieces of a single line.
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_sink(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_to_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("app.log");
        std::fs::write(&log_file, "existing\n").unwrap();

        let mut sink = FileSink::new(&log_file).unwrap();
        assert_eq!(sink.path(), log_file.as_path());
        sink.write_all(b"appended\n").unwrap();
        sink.flush().unwrap();

        let content = std::fs::read_to_string(&log_file).unwrap();
        assert_eq!(content, "existing\nappended\n");
    }

    #[test]
    fn test_flushes_on_drop() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("drop.log");

        {
            let mut sink = FileSink::new(&log_file).unwrap();
            sink.write_all(b"buffered\n").unwrap();
        }

        assert_eq!(std::fs::read_to_string(&log_file).unwrap(), "buffered\n");
    }

    #[test]
    fn test_missing_directory_is_error() {
        let result = FileSink::new("/nonexistent-dir/x/app.log");
        assert!(matches!(result, Err(LoggerError::FileSinkError { .. })));
    }
}
