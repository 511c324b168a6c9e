//! Application-side control over module loggers
//!
//! Run with: cargo run --example complex

use rust_logger_registry::prelude::*;
use rust_logger_registry::{debug, error, fatal, info, warn};

fn separator() {
    println!("=====================================================================================");
}

fn all_levels(logger: &Logger) {
    debug!(logger, "Hello, {}", "World");
    info!(logger, "Hello, {}", "World");
    warn!(logger, "Hello, {}", "World");
    error!(logger, "Hello, {}", "World");
    fatal!(logger, "Hello, {}", "World");
}

fn main() -> Result<()> {
    let logger = get("logger-pool");
    all_levels(&logger);
    separator();

    println!("Level set to INFO, debug disappears:");
    logger.set_level(LogLevel::Info);
    all_levels(&logger);
    separator();

    println!("Colors disabled:");
    logger.set_colorful(false);
    all_levels(&logger);
    separator();

    println!("Registered an ERROR-level logger for a library:");
    let library = Logger::new("github.com/xxx/xxx", LogLevel::Error, true, None);
    register(library);
    all_levels(&get("github.com/xxx/xxx"));
    separator();

    println!("Same logger, configured from JSON:");
    let config = RegistryConfig::from_json_str(
        r#"{ "loggers": { "github.com/xxx/xxx": { "level": "warn", "output": "stderr" } } }"#,
    )?;
    rust_logger_registry::configure(&config)?;
    all_levels(&get("github.com/xxx/xxx"));
    separator();

    println!("Back to DEBUG with colors, redirected to stdout:");
    logger.set_level(LogLevel::Debug);
    logger.set_colorful(true);
    logger.set_output(ConsoleSink::stdout());
    all_levels(&logger);

    Ok(())
}
