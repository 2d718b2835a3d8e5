// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the auto-play sequencer.
//!
//! Measures the performance of:
//! - Stepping the playback cursor through a sequence
//! - Tab switching with its default-highlight reset
//! - Sequence table lookups

use criterion::{criterion_group, criterion_main, Criterion};
use iced_primer::scene::{Playback, Selection, Tab};
use std::hint::black_box;

/// Benchmark one full auto-play cycle across every tab.
fn bench_advance_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback");

    group.bench_function("advance_full_cycle", |b| {
        b.iter(|| {
            for tab in Tab::ALL {
                let sequence = tab.sequence();
                let mut playback = Playback::default();
                black_box(playback.restart(sequence));
                for _ in 0..sequence.len() {
                    black_box(playback.advance(sequence));
                }
            }
        });
    });

    group.finish();
}

/// Benchmark tab switching, which resets the highlight to the tab default.
fn bench_tab_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback");

    group.bench_function("tab_switch", |b| {
        b.iter(|| {
            let mut selection = Selection::default();
            for tab in Tab::ALL {
                selection.set_tab(tab);
                black_box(selection.node());
            }
        });
    });

    group.finish();
}

/// Benchmark the static sequence and membership lookups the views hit on
/// every redraw.
fn bench_sequence_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("playback");

    group.bench_function("sequence_lookup", |b| {
        b.iter(|| {
            for tab in Tab::ALL {
                for node in tab.sequence() {
                    black_box(tab.contains(*node));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_advance_cycle,
    bench_tab_switch,
    bench_sequence_lookup
);
criterion_main!(benches);
