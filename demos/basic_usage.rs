//! Basic logger usage example
//!
//! Demonstrates console logging at every level, value rendering and
//! call-site tokens.
//!
//! Run with: cargo run --example basic_usage

use transport_logger::prelude::*;
use transport_logger::{info, success};

#[derive(Debug)]
#[allow(dead_code)]
struct Request {
    method: &'static str,
    path: &'static str,
    user_id: u32,
}

fn handle_request(logger: &Logger) {
    let request = Request {
        method: "GET",
        path: "/health",
        user_id: 42,
    };
    info!(logger, "handling", inspect(&request));
    success!(logger, "responded with", 200);
}

fn main() -> Result<()> {
    println!("=== Transport Logger - Basic Usage Example ===\n");

    let logger = Logger::new("basic")
        .with_transport(ConsoleTransport::new().with_minimum_level(LoggerLevel::Debug));

    println!("1. Logging at different levels:");
    logger.debug(&[&"This is a debug message"]);
    logger.notice(&[&"This is a notice message"]);
    logger.info(&[&"This is an info message"]);
    logger.success(&[&"This is a success message"]);
    logger.warning(&[&"This is a warning message"]);
    logger.error(&[&"This is an error message"]);

    println!("\n2. Mixed values:");
    logger.info(&[&"Some info message", &"with", &4, &"arguments"]);
    logger.info(&[&"ratio", &0.75, &"enabled", &true, &"missing", &None::<u8>]);

    println!("\n3. Minimum level set to WARNING, debug to success are hidden:");
    logger.set_minimum_level(LoggerLevel::Warning);
    logger.info(&[&"Info message (hidden)"]);
    logger.warning(&[&"Warning message (visible)"]);

    println!("\n4. Call-site tokens:");
    logger.set_minimum_level(LoggerLevel::Debug);
    logger.configure_transport(0, |config| {
        config.log_format = "{time} {level} {fileName}:{lineNumber} {functionName} | {content}".to_string();
        config.time_format = TimestampFormat::custom("%H:%M:%S");
    });
    handle_request(&logger);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
