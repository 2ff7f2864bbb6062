// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the scroll reveal evaluation.
//!
//! Measures the performance of:
//! - Registering the full page's reveal targets
//! - A single evaluation pass against one viewport
//! - A full top-to-bottom scroll sweep

use agentcore_showcase::page::layout;
use agentcore_showcase::reveal::RevealTrigger;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const VIEWPORT_HEIGHT: f32 = 736.0;

/// Benchmark registering every reveal target on the page.
fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_sweep");

    let targets = layout::reveal_targets();

    group.bench_function("register_page_targets", |b| {
        b.iter(|| {
            let mut trigger = RevealTrigger::default();
            for (id, bounds) in &targets {
                trigger.register(*id, *bounds);
            }
            black_box(&trigger);
        });
    });

    group.finish();
}

/// Benchmark one evaluation pass, the per-scroll-event hot path.
fn bench_single_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_sweep");

    let mut trigger = RevealTrigger::default();
    for (id, bounds) in layout::reveal_targets() {
        trigger.register(id, bounds);
    }
    let viewport = layout::viewport_in_content(0.0, VIEWPORT_HEIGHT);

    group.bench_function("evaluate_single_pass", |b| {
        b.iter(|| {
            let mut pass = trigger.clone();
            black_box(pass.evaluate(viewport));
        });
    });

    group.finish();
}

/// Benchmark a full scroll from the top of the page to the bottom.
fn bench_full_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_sweep");

    let targets = layout::reveal_targets();
    let max_offset = layout::max_scroll_offset(VIEWPORT_HEIGHT);

    group.bench_function("evaluate_full_sweep", |b| {
        b.iter(|| {
            let mut trigger = RevealTrigger::default();
            for (id, bounds) in &targets {
                trigger.register(*id, *bounds);
            }

            let mut offset = 0.0;
            let mut fired = 0;
            while offset <= max_offset {
                fired += trigger
                    .evaluate(layout::viewport_in_content(offset, VIEWPORT_HEIGHT))
                    .len();
                offset += 120.0;
            }
            black_box(fired);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_register, bench_single_pass, bench_full_sweep);
criterion_main!(benches);
