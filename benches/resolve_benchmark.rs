//! Performance benchmarks for hover resolution
//!
//! Tests resolve time across list sizes and pointer placements.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rowhover::prelude::*;

const SLOT_HEIGHT: i32 = 40;

/// Build a host snapshot with `count` stacked slots.
fn build_snapshot(count: usize) -> PageSnapshot {
    let slots = (0..count)
        .map(|i| Slot::new(Rect::new(50, 100 + i as i32 * SLOT_HEIGHT, 200, 36), i))
        .collect();
    PageSnapshot::new(slots, 0)
}

fn build_entries(count: usize) -> Vec<Entry> {
    (0..count).map(|i| Entry::real(format!("entry-{i}"))).collect()
}

/// Benchmark a pointer landing on the last row of the visible page
fn bench_resolve_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_hit");

    for size in [5usize, 25, 100].iter() {
        let snapshot = build_snapshot(*size);
        let entries = build_entries(*size);
        let metrics = PageMetrics::for_tile(64, (*size).min(10));
        let mut resolver = HoverResolver::new(metrics);
        resolver.reset(&snapshot, &entries);

        // Bottom row of the visible page
        let page_rows = metrics.slots_per_page as i32;
        let pointer = Point::new(150, 100 + (page_rows - 1) * SLOT_HEIGHT + 20);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_slots", size)),
            &pointer,
            |b, pointer| {
                b.iter(|| {
                    let hit = resolver.resolve(black_box(*pointer), &snapshot, &entries);
                    black_box(hit)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the page-bounds short-circuit on a pointer far outside the list
fn bench_resolve_reject(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_reject");

    for size in [5usize, 100].iter() {
        let snapshot = build_snapshot(*size);
        let entries = build_entries(*size);
        let mut resolver = HoverResolver::new(PageMetrics::for_tile(64, 10));
        resolver.reset(&snapshot, &entries);

        let pointer = Point::new(5000, 5000);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_slots", size)),
            &pointer,
            |b, pointer| {
                b.iter(|| {
                    let hit = resolver.resolve(black_box(*pointer), &snapshot, &entries);
                    black_box(hit)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_resolve_hit, bench_resolve_reject);
criterion_main!(benches);
