//! In-memory sink
//!
//! Clones share one buffer, so a host can hand a clone to a logger and read
//! the captured output through the original.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_all(b"first\nsecond\n").unwrap();

        assert_eq!(sink.contents(), "first\nsecond\n");
        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert_eq!(sink.len(), 13);
    }

    #[test]
    fn test_clear() {
        let sink = MemorySink::new();
        sink.clone().write_all(b"x").unwrap();
        assert!(!sink.is_empty());
        sink.clear();
        assert!(sink.is_empty());
    }
}
