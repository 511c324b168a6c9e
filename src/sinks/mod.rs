//! Sink implementations
//!
//! A sink is any `std::io::Write + Send`. These cover the common destinations.

pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;

pub use console::ConsoleSink;
#[cfg(feature = "file")]
pub use file::FileSink;
pub use memory::MemorySink;
