//! Caller location resolution
//!
//! Level methods are `#[track_caller]`, so the location is resolved by the
//! compiler at the call site instead of by walking the stack at runtime.
//! A wrapper that should be skipped marks itself `#[track_caller]` as well.

use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};

/// Upper bound for a logger's call stack depth
pub const MAX_CALL_STACK_DEPTH: usize = 10;

/// Depth given to new loggers: the direct caller of the level method
pub const DEFAULT_CALL_STACK_DEPTH: usize = 1;

static LOG_FILE_AND_LINE: AtomicBool = AtomicBool::new(true);

/// Process-wide switch for file name and line number output
///
/// Production applications may turn this off to skip caller resolution
/// in every logger at once.
pub fn set_log_file_and_line(enabled: bool) {
    LOG_FILE_AND_LINE.store(enabled, Ordering::Relaxed);
}

pub fn log_file_and_line() -> bool {
    LOG_FILE_AND_LINE.load(Ordering::Relaxed)
}

/// Clamp a requested depth into `[0, MAX_CALL_STACK_DEPTH]`
pub fn clamp_depth(depth: i64) -> usize {
    depth.clamp(0, MAX_CALL_STACK_DEPTH as i64) as usize
}

/// Source location of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerLocation {
    pub file: &'static str,
    pub line: u32,
}

impl CallerLocation {
    /// Resolve the caller, honouring the global switch and the logger's depth
    #[track_caller]
    pub fn resolve(depth: usize) -> Option<Self> {
        if depth == 0 || !log_file_and_line() {
            return None;
        }
        let location = Location::caller();
        Some(Self {
            file: location.file(),
            line: location.line(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_depth() {
        assert_eq!(clamp_depth(-1), 0);
        assert_eq!(clamp_depth(0), 0);
        assert_eq!(clamp_depth(3), 3);
        assert_eq!(clamp_depth(10), 10);
        assert_eq!(clamp_depth(11), 10);
        assert_eq!(clamp_depth(i64::MIN), 0);
        assert_eq!(clamp_depth(i64::MAX), 10);
    }

    #[test]
    fn test_zero_depth_resolves_nothing() {
        assert_eq!(CallerLocation::resolve(0), None);
    }

    #[test]
    fn test_resolve_points_at_call_site() {
        let expected_line = line!() + 1;
        let caller = CallerLocation::resolve(DEFAULT_CALL_STACK_DEPTH).unwrap();
        assert_eq!(caller.line, expected_line);
        assert!(caller.file.ends_with("caller.rs"));
    }
}
