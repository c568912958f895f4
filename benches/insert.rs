//! Benchmarks for price tree inserts and listings.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- sequential_insert
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    BatchSize, BenchmarkId, Criterion, Throughput,
};

use price_tree::{OrderBook, Price, PriceTree, Side};

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

/// Random prices around 100.00 in 0.01 ticks
fn generate_prices(count: usize, seed: u64) -> Vec<Price> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let ticks: i64 = rng.gen_range(-5_000..=5_000);
            Price::from_raw(10_000_000_000 + ticks * 1_000_000)
        })
        .collect()
}

fn build_tree(prices: &[Price]) -> PriceTree {
    let mut tree = PriceTree::with_capacity(prices.len());
    for (i, &price) in prices.iter().enumerate() {
        tree.insert(price, 1, format!("o{i}"));
    }
    tree
}

// ============================================================================
// BENCHMARK: Insert
// ============================================================================

fn bench_sequential_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_insert");

    for &size in &[1_000usize, 10_000, 100_000] {
        let prices: Vec<Price> = (0..size as i64).map(Price::from_raw).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &prices, |b, prices| {
            b.iter(|| black_box(build_tree(prices)));
        });
    }

    group.finish();
}

fn bench_random_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_insert");

    for &size in &[1_000usize, 10_000, 100_000] {
        let prices = generate_prices(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &prices, |b, prices| {
            b.iter(|| black_box(build_tree(prices)));
        });
    }

    group.finish();
}

/// One insert into an already populated tree
fn bench_single_insert(c: &mut Criterion) {
    let prices = generate_prices(100_000, 7);
    let tree = build_tree(&prices);

    c.bench_function("single_insert_into_100k", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                tree.insert(black_box(Price::from_raw(10_000_000_000)), 1, "probe");
                tree
            },
            BatchSize::LargeInput,
        );
    });
}

// ============================================================================
// BENCHMARK: Listing and round trip
// ============================================================================

fn bench_inorder(c: &mut Criterion) {
    let tree = build_tree(&generate_prices(100_000, 3));

    c.bench_function("inorder_100k", |b| {
        b.iter(|| black_box(tree.inorder()));
    });
}

fn bench_export_import(c: &mut Criterion) {
    let mut book = OrderBook::new();
    for (i, price) in generate_prices(20_000, 9).into_iter().enumerate() {
        let side = if i % 2 == 0 { Side::Bid } else { Side::Ask };
        book.place(side, price, 1, format!("o{i}"));
    }
    let snapshot = book.export();

    c.bench_function("import_20k", |b| {
        b.iter(|| black_box(OrderBook::import(black_box(&snapshot))));
    });
}

criterion_group!(
    benches,
    bench_sequential_insert,
    bench_random_insert,
    bench_single_insert,
    bench_inorder,
    bench_export_import,
);
criterion_main!(benches);
