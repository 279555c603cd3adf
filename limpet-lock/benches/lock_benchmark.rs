//! Benchmark for the coarse-lock list contract:
//! - end insertion, predicate scans and both sort strategies
//! - contended push throughput across thread counts
//!
//! Run with: cargo bench --package limpet-lock --bench lock_benchmark

use std::sync::Arc;
use std::thread;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use mimalloc::MiMalloc;

use limpet_lock::GuardedList;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const OPS_PER_THREAD: usize = 1_000;

// =============================================================================
// Single-Thread Benchmarks (No Contention)
// =============================================================================

fn single_thread_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_single_thread");

    group.bench_function("push_tail_1000", |b| {
        b.iter(|| {
            let list = GuardedList::new();
            for i in 0..1_000usize {
                list.push_tail(i);
            }
            black_box(list.len())
        })
    });

    group.bench_function("push_head_pop_mixed_1000", |b| {
        b.iter(|| {
            let list = GuardedList::new();
            for i in 0..1_000usize {
                list.push_head(i);
                if i % 4 == 0 {
                    let _ = list.remove_at(0);
                }
            }
            black_box(list.len())
        })
    });

    group.bench_function("predicate_scan_hit_last_512", |b| {
        let list = GuardedList::new();
        for i in 0..512usize {
            list.push_tail(i);
        }
        b.iter(|| black_box(list.find_and_apply(|&x| x == 511, |&x| x)))
    });

    group.finish();
}

// =============================================================================
// Sort Strategy Benchmarks
// =============================================================================

fn sort_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_sort");

    for size in [64usize, 256, 1024] {
        group.bench_with_input(
            BenchmarkId::new("default_exchange_sort", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let list = GuardedList::new();
                    for i in (0..size).rev() {
                        list.push_tail(i);
                    }
                    list.sort(|a, b| a.cmp(b));
                    black_box(list.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("vec_drain_strategy", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let list = GuardedList::new();
                    for i in (0..size).rev() {
                        list.push_tail(i);
                    }
                    list.sort_by(|raw| {
                        let mut items: Vec<_> =
                            std::iter::from_fn(|| raw.pop_head()).collect();
                        items.sort();
                        raw.extend(items);
                    });
                    black_box(list.len())
                })
            },
        );
    }

    group.finish();
}

// =============================================================================
// Contended Benchmarks
// =============================================================================

fn contention_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_contention");
    group.sample_size(10);

    for thread_count in [2usize, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("contended_push_tail", thread_count),
            &thread_count,
            |b, &thread_count| {
                b.iter(|| {
                    let list = Arc::new(GuardedList::new());

                    let handles: Vec<_> = (0..thread_count)
                        .map(|t| {
                            let list = Arc::clone(&list);
                            thread::spawn(move || {
                                for i in 0..OPS_PER_THREAD {
                                    list.push_tail(t * OPS_PER_THREAD + i);
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }

                    black_box(list.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    single_thread_benchmark,
    sort_benchmark,
    contention_benchmark
);
criterion_main!(benches);
