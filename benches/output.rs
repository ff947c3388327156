use criterion::{Criterion, criterion_group, criterion_main};
use indentlog::{Args, FileOutput, IndentLogExt, LogLevel, Logger, Output};
use std::hint::black_box;
use tempfile::TempDir;

fn bench_file_output_write(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let output = FileOutput::new().path(tmp.path().join("bench.log"));

    c.bench_function("FileOutput::write", |b| {
        b.iter(|| {
            output
                .write(black_box("18/10/26 09:15:00+0200  INF  .  benchmark line"))
                .expect("write failed");
        });
    });
}

fn bench_logger_scope(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let logger = Logger::builder()
        .file()
        .path(tmp.path().join("scope.log"))
        .done()
        .build();

    c.bench_function("Logger::scope", |b| {
        b.iter(|| {
            logger.scope(black_box("step"), || logger.info(black_box("inside")));
        });
    });
}

fn bench_filtered_out(c: &mut Criterion) {
    let logger = Logger::builder().allow([LogLevel::Error]).build();
    let args = Args::new().arg("id", 7);

    c.bench_function("Logger::debug filtered", |b| {
        b.iter(|| {
            logger.debug(black_box("never formatted"));
            logger.debug_args(black_box("never formatted"), &args);
        });
    });
}

criterion_group!(
    benches,
    bench_file_output_write,
    bench_logger_scope,
    bench_filtered_out
);
criterion_main!(benches);
