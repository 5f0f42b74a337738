//! Benchmark for Deque vs standard VecDeque.
//!
//! Compares push/pop at both ends and the round-robin combinators against
//! `std::collections::VecDeque`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fpqueues::collections::Deque;
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// Push Benchmarks
// =============================================================================

fn benchmark_push_both_ends(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push_both_ends");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Deque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque = Deque::new();
                for index in 0..size {
                    if index % 2 == 0 {
                        deque.push_back(black_box(index));
                    } else {
                        deque.push_front(black_box(index));
                    }
                }
                black_box(deque)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        if index % 2 == 0 {
                            deque.push_back(black_box(index));
                        } else {
                            deque.push_front(black_box(index));
                        }
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_push_with_absent_values(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push_back_all");

    for size in [100, 1000, 10000] {
        let values: Vec<Option<i32>> = (0..size)
            .map(|index| (index % 3 != 0).then_some(index))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("Deque", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let mut deque = Deque::new();
                    deque.push_back_all(values.iter().copied());
                    black_box(deque)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let deque: VecDeque<i32> = values.iter().copied().flatten().collect();
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Pop Benchmarks
// =============================================================================

fn benchmark_drain_front(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("drain_front");

    for size in [100, 1000, 10000] {
        let deque: Deque<i32> = (0..size).collect();
        let standard_deque: VecDeque<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Deque", size), &deque, |bencher, deque| {
            bencher.iter(|| {
                let mut deque = deque.clone();
                let mut sum = 0i64;
                while let Some(value) = deque.pop_front().into_option() {
                    sum += i64::from(value);
                }
                black_box(sum)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &standard_deque,
            |bencher, standard_deque| {
                bencher.iter(|| {
                    let mut deque = standard_deque.clone();
                    let mut sum = 0i64;
                    while let Some(value) = deque.pop_front() {
                        sum += i64::from(value);
                    }
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Combinator Benchmarks
// =============================================================================

fn benchmark_round_robin(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("round_robin");

    for size in [10, 100, 1000] {
        let deque: Deque<usize> = (0..size).map(|index| index % 16).collect();
        let expand = |&n: &usize| (0..n).collect::<Deque<usize>>();

        group.bench_with_input(
            BenchmarkId::new("merge_map", size),
            &deque,
            |bencher, deque| {
                bencher.iter(|| black_box(deque.merge_map(expand)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("exhaust_map", size),
            &deque,
            |bencher, deque| {
                bencher.iter(|| black_box(deque.exhaust_map(expand)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("flat_map", size),
            &deque,
            |bencher, deque| {
                bencher.iter(|| black_box(deque.flat_map(expand)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push_both_ends,
    benchmark_push_with_absent_values,
    benchmark_drain_front,
    benchmark_round_robin
);

criterion_main!(benches);
