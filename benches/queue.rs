//! Benchmarks for the ordered queue.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- insert
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use ordered_queue::{OrderedQueue, Symbol};

// ============================================================================
// HELPER FUNCTIONS - Deterministic symbol generation
// ============================================================================

/// Generate a vector of deterministic symbols with priorities in `1..=10`.
fn generate_symbols(count: usize, seed: u64) -> Vec<Symbol> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let prior = rng.gen_range(Symbol::MIN_PRIORITY..=Symbol::MAX_PRIORITY);
            Symbol::new('s', prior)
        })
        .collect()
}

/// Build a queue holding `count` deterministic symbols.
fn populated_queue(count: usize) -> OrderedQueue<Symbol> {
    generate_symbols(count, 42).into_iter().collect()
}

// ============================================================================
// BENCHMARK: Single Operations
// ============================================================================

fn bench_single_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_operations");

    group.measurement_time(Duration::from_secs(5));

    // Insert into an empty queue
    group.bench_function("insert_into_empty", |b| {
        b.iter_batched(
            OrderedQueue::<Symbol>::new,
            |mut queue| {
                queue.insert(Symbol::new('a', 5));
                black_box(queue)
            },
            BatchSize::SmallInput,
        );
    });

    // Lowest priority walks the whole chain
    group.bench_function("insert_lowest_into_1k", |b| {
        b.iter_batched(
            || populated_queue(1_000),
            |mut queue| {
                queue.insert(Symbol::new('a', Symbol::MIN_PRIORITY));
                black_box(queue)
            },
            BatchSize::SmallInput,
        );
    });

    // Highest priority becomes the head immediately
    group.bench_function("insert_new_head_into_1k", |b| {
        b.iter_batched(
            || populated_queue(1_000),
            |mut queue| {
                queue.insert(Symbol::new('a', Symbol::MAX_PRIORITY + 1));
                black_box(queue)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("remove_from_1k", |b| {
        b.iter_batched(
            || populated_queue(1_000),
            |mut queue| black_box(queue.remove()),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for batch_size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("fill_and_drain", batch_size),
            &batch_size,
            |b, &size| {
                let symbols = generate_symbols(size, 42);

                b.iter_batched(
                    || (OrderedQueue::with_capacity(size), symbols.clone()),
                    |(mut queue, symbols)| {
                        for symbol in symbols {
                            queue.insert(symbol);
                        }
                        while !queue.is_empty() {
                            black_box(queue.remove());
                        }
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Copy and Move
// ============================================================================

fn bench_copy_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_move");

    let queue = populated_queue(10_000);

    group.bench_function("clone_10k", |b| {
        b.iter(|| black_box(queue.clone()));
    });

    group.bench_function("take_10k", |b| {
        b.iter_batched(
            || queue.clone(),
            |mut source| black_box(source.take()),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_single_operations,
    bench_throughput,
    bench_copy_move
);

criterion_main!(benches);
