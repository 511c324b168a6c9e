//! Free-standing logging through the root logger
//!
//! Run with: cargo run --example simple

use rust_logger_registry as logger;

fn main() {
    logger::debug(format_args!("Hello, {}", "World"));
    logger::info(format_args!("Hello, {}", "World"));
    logger::warn(format_args!("Hello, {}", "World"));
    logger::error(format_args!("Hello, {}", "World"));
    logger::fatal(format_args!("Hello, {}", "World"));

    // Libraries should take their logger from the registry so the
    // application entry point stays in control of it
    let module_logger = logger::get("module_full_name");
    module_logger.info("This is a module logger, it is able to be controlled by application entry");
}
