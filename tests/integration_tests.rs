//! Integration tests for the transport logger
//!
//! These tests verify:
//! - Fan-out to several transports with independent thresholds and layouts
//! - The on-disk layout written by the file transport, including rollover
//! - Loading a logger from a JSON configuration document
//! - Failure isolation between transports

use std::fs;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;
use transport_logger::prelude::*;
use transport_logger::transports::ROLLOVER_AGE;
use transport_logger::{info, warning};

fn content_only() -> TransportConfig {
    TransportConfig::new()
        .with_log_format("{content}")
        .with_minimum_level(LoggerLevel::Debug)
}

#[test]
fn test_file_layout_and_line_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_dir = temp_dir.path().join("logs");

    let logger = Logger::new("api").with_transport(
        PlainFileTransport::new()
            .with_log_path(&log_dir)
            .with_log_format("{level}|{name}|{content}"),
    );

    logger.info(&[&"Some info message", &"with", &4, &"arguments"]);
    logger.error(&[&"request failed:", &500]);
    logger.debug(&[&"below threshold"]);

    let content = fs::read_to_string(log_dir.join("api-latest.log")).expect("Failed to read log file");
    assert_eq!(
        content,
        " info  |api|Some info message with 4 arguments\n error |api|request failed: 500\n"
    );
    // Plain files never carry colour codes.
    assert!(!content.contains('\u{1b}'));
}

#[test]
fn test_default_template_in_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let logger = Logger::new("svc")
        .with_transport(PlainFileTransport::new().with_log_path(temp_dir.path()));
    logger.warning(&[&"careful"]);

    let content = fs::read_to_string(temp_dir.path().join("svc-latest.log")).unwrap();
    let line = content.trim_end();
    let parts: Vec<&str> = line.split(" | ").collect();
    assert_eq!(parts.len(), 4, "unexpected line: {line}");
    assert_eq!(parts[1], "warning");
    assert_eq!(parts[2], "svc");
    assert_eq!(parts[3], "careful");
    // 1/8/2025 10:30:45
    assert!(parts[0].contains('/') && parts[0].contains(':'));
}

#[test]
fn test_fan_out_with_independent_thresholds() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let memory = MemoryTransport::with_config(content_only());

    let logger = Logger::new("worker")
        .with_transport(memory.clone())
        .with_transport(
            PlainFileTransport::new()
                .with_log_path(temp_dir.path())
                .with_log_format("{content}")
                .with_minimum_level(LoggerLevel::Warning),
        );

    logger.debug(&[&"a"]);
    logger.notice(&[&"b"]);
    logger.warning(&[&"c"]);
    logger.error(&[&"d"]);

    assert_eq!(memory.raw_lines(), vec!["a", "b", "c", "d"]);
    let content = fs::read_to_string(temp_dir.path().join("worker-latest.log")).unwrap();
    assert_eq!(content, "c\nd\n");
}

#[test]
fn test_two_loggers_share_a_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let transport = || {
        PlainFileTransport::new()
            .with_log_path(temp_dir.path())
            .with_log_format("{name}:{content}")
    };

    let db = Logger::new("db").with_transport(transport());
    let http = Logger::new("http").with_transport(transport());
    db.info(&[&"connected"]);
    http.info(&[&"listening"]);
    db.info(&[&"query"]);

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("db-latest.log")).unwrap(),
        "db:connected\ndb:query\n"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("http-latest.log")).unwrap(),
        "http:listening\n"
    );
}

#[test]
fn test_rollover_through_logger() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let clock = ManualClock::new(SystemTime::now());

    let logger = Logger::new("daily").with_transport(
        PlainFileTransport::new()
            .with_log_path(temp_dir.path())
            .with_log_format("{content}")
            .with_clock(clock.clone()),
    );

    logger.info(&[&"day one"]);
    clock.advance(ROLLOVER_AGE + Duration::from_secs(60));
    logger.info(&[&"day two"]);

    let mut names: Vec<String> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names.len(), 2, "unexpected files: {names:?}");
    assert!(names.contains(&"daily-latest.log".to_string()));
    let archive = names.iter().find(|n| *n != "daily-latest.log").unwrap();
    assert!(archive.starts_with("daily-") && archive.ends_with(".log"));
    // daily-YYYY-MM-DD.log
    assert_eq!(archive.len(), "daily-".len() + 10 + ".log".len());

    assert_eq!(fs::read_to_string(temp_dir.path().join(archive)).unwrap(), "day one\n");
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("daily-latest.log")).unwrap(),
        "day two\n"
    );
}

#[test]
fn test_logger_from_json_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_dir = temp_dir.path().join("configured");
    let document = serde_json::json!({
        "name": "configured",
        "file": {
            "log_path": log_dir,
            "log_format": "{level}:{content}",
            "minimum_level": "notice",
            "file_retention": 2
        }
    })
    .to_string();

    let logger = LoggerConfig::from_json(&document)
        .and_then(|config| config.build())
        .expect("Failed to build logger");

    logger.debug(&[&"skipped"]);
    logger.notice(&[&"kept"]);

    let content = fs::read_to_string(log_dir.join("configured-latest.log")).unwrap();
    assert_eq!(content, "notice :kept\n");
}

#[test]
fn test_failing_file_transport_does_not_block_others() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let failures = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let failures_clone = Arc::clone(&failures);
    let memory = MemoryTransport::with_config(content_only());

    // The parent of the log directory does not exist and is not created.
    let logger = Logger::builder()
        .name("isolated")
        .transport(PlainFileTransport::new().with_log_path(temp_dir.path().join("missing/logs")))
        .transport(memory.clone())
        .on_failure(Arc::new(move |failure: &TransportFailure| {
            failures_clone.lock().push(failure.index);
        }))
        .build();

    logger.info(&[&"still delivered"]);

    assert_eq!(memory.raw_lines(), vec!["still delivered"]);
    assert_eq!(*failures.lock(), vec![Some(0)]);
    assert_eq!(logger.metrics().failed_writes(), 1);

    let err = logger.try_log(LoggerLevel::Info, &[&"again"]).unwrap_err();
    assert!(matches!(err, LoggerError::IoOperation { .. }));
}

#[test]
fn test_macros_with_file_transport() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new("macro").with_transport(
        PlainFileTransport::new()
            .with_log_path(temp_dir.path())
            .with_log_format("{fileName}:{functionName}:{content}"),
    );

    info!(logger, "started");
    warning!(logger, "retry", 2, "of", 5);

    let content = fs::read_to_string(temp_dir.path().join("macro-latest.log")).unwrap();
    assert_eq!(
        content,
        "integration_tests.rs:test_macros_with_file_transport:started\n\
         integration_tests.rs:test_macros_with_file_transport:retry 2 of 5\n"
    );
}

#[test]
fn test_non_blocking_file_transport() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new("bg").with_transport(NonBlockingTransport::new(
        PlainFileTransport::new()
            .with_log_path(temp_dir.path())
            .with_log_format("{content}"),
    ));

    for i in 0..100 {
        logger.info(&[&"line", &i]);
    }
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(temp_dir.path().join("bg-latest.log")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 100);
    assert_eq!(lines[0], "line 0");
    assert_eq!(lines[99], "line 99");
}

#[test]
fn test_inspected_values() {
    #[derive(Debug)]
    #[allow(dead_code)]
    struct Config {
        retries: u8,
        endpoints: Vec<&'static str>,
    }

    let memory = MemoryTransport::with_config(content_only());
    let logger = Logger::new("inspect").with_transport(memory.clone());

    let small = Config { retries: 3, endpoints: vec!["a"] };
    let large = Config {
        retries: 3,
        endpoints: vec!["https://primary.example.com", "https://secondary.example.com"],
    };
    logger.info(&[&"small", &inspect(&small)]);
    logger.info(&[&"large", &inspect(&large)]);
    logger.info(&[&None::<u8>, &Some(5)]);

    let lines = memory.raw_lines();
    assert_eq!(lines[0], r#"small Config { retries: 3, endpoints: ["a"] }"#);
    assert!(lines[1].starts_with("large Config {\n"));
    assert!(lines[1].contains("    retries: 3,\n"));
    assert_eq!(lines[2], "None 5");
}
