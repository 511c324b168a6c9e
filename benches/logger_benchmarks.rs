//! Criterion benchmarks for rust_logger_registry

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logger_registry::prelude::*;
use std::io::{self, Write};
use std::sync::Arc;

/// Discards everything, so only formatting and locking are measured
struct NullSink;

impl Write for NullSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn null_logger(level: LogLevel, colorful: bool) -> Logger {
    Logger::new("bench", level, colorful, Some(Box::new(NullSink)))
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.throughput(Throughput::Elements(1));

    let registry = Registry::new();
    registry.get("github.com/xxx/xxx");

    group.bench_function("get_existing", |b| {
        b.iter(|| black_box(registry.get(black_box("github.com/xxx/xxx"))));
    });

    group.bench_function("root", |b| {
        b.iter(|| black_box(registry.root()));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let plain = null_logger(LogLevel::Debug, false);
    group.bench_function("info_plain", |b| {
        b.iter(|| plain.info(black_box("Info message")));
    });

    group.bench_function("info_formatted", |b| {
        b.iter(|| plain.info(format_args!("Hello, {}", black_box("World"))));
    });

    let colorful = null_logger(LogLevel::Debug, true);
    group.bench_function("info_colorful", |b| {
        b.iter(|| colorful.info(black_box("Info message")));
    });

    let no_caller = null_logger(LogLevel::Debug, false);
    no_caller.set_call_stack_depth(0);
    group.bench_function("info_without_caller", |b| {
        b.iter(|| no_caller.info(black_box("Info message")));
    });

    group.finish();
}

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(LogLevel::Error, false);

    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(format_args!("Hello, {}", black_box("World"))));
    });

    group.bench_function("passed_error", |b| {
        b.iter(|| logger.error(format_args!("Hello, {}", black_box("World"))));
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("{}_threads", threads), |b| {
            let logger = Arc::new(null_logger(LogLevel::Debug, false));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                logger.info(format_args!("Message {}", i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_registry,
    bench_logging,
    bench_level_filtering,
    bench_concurrent_logging,
);
criterion_main!(benches);
