//! Non-blocking logging example
//!
//! Demonstrates handing file writes to a background thread and observing
//! failures that happen after the log call returned.
//!
//! Run with: cargo run --example non_blocking

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use transport_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Transport Logger - Non-Blocking Example ===\n");

    let failures = Arc::new(AtomicUsize::new(0));
    let failures_clone = Arc::clone(&failures);

    let file = PlainFileTransport::new()
        .with_log_path("logs")
        .with_log_format("{time} | {level} | {content}")
        .with_custom_time("%H:%M:%S%.3f");

    let logger = Arc::new(
        Logger::new("background").with_transport(NonBlockingTransport::with_failure_handler(
            file,
            Arc::new(move |failure: &TransportFailure| {
                eprintln!("write failed: {}", failure);
                failures_clone.fetch_add(1, Ordering::Relaxed);
            }),
        )),
    );

    println!("1. Logging from 4 threads:");
    let start = Instant::now();
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..1000 {
                    logger.info(&[&"worker", &worker, &"item", &i]);
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }
    println!("   4000 records queued in {:?}", start.elapsed());

    logger.flush()?;
    println!("   written in {:?}", start.elapsed());

    println!("\n2. Failures reported: {}", failures.load(Ordering::Relaxed));

    println!("\n=== Example completed successfully! ===");
    println!("Check 'logs/background-latest.log' for the output");

    Ok(())
}
