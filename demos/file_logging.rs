//! File logging example
//!
//! Demonstrates logging to the console and to a rolling plain file at the
//! same time, with a logger built from a JSON document.
//!
//! Run with: cargo run --example file_logging

use transport_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Transport Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json(
        r#"{
            "name": "application",
            "console": { "minimum_level": "info" },
            "file": {
                "log_path": "logs",
                "file_retention": 7,
                "minimum_level": "debug",
                "time_format": "iso8601"
            }
        }"#,
    )?;
    let logger = config.build()?;

    println!("1. Logging to both console and file:");

    logger.info(&[&"Application started"]);
    logger.debug(&[&"Loading configuration..."]);
    logger.info(&[&"Configuration loaded successfully"]);
    logger.warning(&[&"Using default settings for some options"]);
    logger.notice(&[&"Connecting to database..."]);
    logger.success(&[&"Database connection established"]);
    logger.error(&[&"Failed to load optional plugin"]);

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        logger.info(&[&format_args!("Processing item {}/5", i)]);
        if i == 3 {
            logger.warning(&[&"Item 3 took longer than expected"]);
        }
    }

    logger.success(&[&"All operations completed"]);

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'logs/application-latest.log' for the full log output");

    Ok(())
}
