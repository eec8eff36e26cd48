//! Criterion benchmarks for transport_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use transport_logger::core::template::{self, LineParts};
use transport_logger::prelude::*;

fn memory_logger(format: &str) -> (Logger, MemoryTransport) {
    let memory = MemoryTransport::with_config(
        TransportConfig::new()
            .with_log_format(format)
            .with_minimum_level(LoggerLevel::Debug),
    );
    let logger = Logger::new("bench").with_transport(memory.clone());
    (logger, memory)
}

// ============================================================================
// Template Benchmarks
// ============================================================================

fn bench_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("template");
    group.throughput(Throughput::Elements(1));

    let site = CallSite::new("src/server.rs", 42, 9).with_function("handle");
    let parts = LineParts {
        time: "1/8/2025 10:30:45",
        level: LoggerLevel::Warning,
        name: "bench",
        content: "Some info message with 4 arguments",
        call_site: Some(&site),
    };

    group.bench_function("default_format", |b| {
        b.iter(|| black_box(template::render(black_box(template::DEFAULT_LOG_FORMAT), &parts)));
    });

    group.bench_function("call_site_format", |b| {
        b.iter(|| {
            black_box(template::render(
                black_box("{time} {level} {fileName}:{lineNumber} {functionName} {content}"),
                &parts,
            ))
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let (logger, memory) = memory_logger(template::DEFAULT_LOG_FORMAT);

    group.bench_function("single_value", |b| {
        b.iter(|| {
            logger.info(&[&black_box("Info message")]);
            memory.clear();
        });
    });

    group.bench_function("mixed_values", |b| {
        b.iter(|| {
            logger.warning(&[&"retry", &black_box(3), &"of", &5, &true]);
            memory.clear();
        });
    });

    group.bench_function("inspected_value", |b| {
        let payload = vec![("user", 42), ("session", 7)];
        b.iter(|| {
            logger.debug(&[&"payload", &inspect(black_box(&payload))]);
            memory.clear();
        });
    });

    group.bench_function("filtered_out", |b| {
        let (logger, _memory) = memory_logger("{content}");
        logger.set_minimum_level(LoggerLevel::Error);
        b.iter(|| logger.debug(&[&black_box("dropped")]));
    });

    group.finish();
}

fn bench_non_blocking(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_blocking");
    group.throughput(Throughput::Elements(1));

    let memory = MemoryTransport::with_config(TransportConfig::new().with_log_format("{content}"));
    let logger = Logger::new("bench").with_transport(NonBlockingTransport::new(memory.clone()));

    group.bench_function("enqueue", |b| {
        b.iter(|| logger.info(&[&black_box("queued message")]));
    });

    let _ = logger.flush();
    memory.clear();
    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            b.iter(|| {
                let (logger, _memory) = memory_logger("{content}");
                let logger = Arc::new(logger);
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                logger.info(&[&t, &i]);
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_template,
    bench_logging,
    bench_non_blocking,
    bench_concurrent_logging,
);

criterion_main!(benches);
