//! Benchmarks to measure the compute overhead of `lap_tracker` logic itself.
//!
//! These benchmarks measure the overhead of the recording infrastructure -
//! sections and laps that do no actual work but still incur the bookkeeping
//! and clock-read cost.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lap_tracker::Trace;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("lap_tracker_overhead");

    // Baseline measurement - no recording at all.
    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            black_box(());
        });
    });

    // Full lifecycle of a minimal trace: one section, one lap.
    group.bench_function("start_lap_stop", |b| {
        b.iter(|| {
            let mut trace = Trace::new();
            trace.start("section").unwrap();
            trace.lap("lap").unwrap();
            trace.stop("section").unwrap();
            black_box(trace);
        });
    });

    // Lap recording cost once a section is already open. Identifiers must be
    // unique for the trace lifetime, so each lap gets a fresh iterator key.
    group.bench_function("lap_keyed_in_open_section", |b| {
        let mut trace = Trace::new();
        trace.start("section").unwrap();
        let mut key = 0_u64;

        b.iter(|| {
            key = key.wrapping_add(1);
            trace.lap_keyed("lap", &key.to_string()).unwrap();
        });

        trace.stop("section").unwrap();
        black_box(trace);
    });

    // Rendering cost over a fixed recorded structure.
    group.bench_function("render_text_10_sections", |b| {
        let mut trace = Trace::new();
        for i in 0..10 {
            let name = format!("section_{i}");
            trace.start(&name).unwrap();
            trace.lap(format!("lap_{i}")).unwrap();
            trace.stop(&name).unwrap();
        }

        b.iter(|| {
            let report = trace.to_text_report().unwrap();
            black_box(report);
        });
    });

    group.finish();
}
