//! Benchmark for query_intersecting performance
//!
//! Measures `query_intersecting` on a RangeTree with 1M random intervals.
//! Queries are performed with varying coverage of the key space (10%, 1%, 0.01%).

use rand::Rng;
use rand::SeedableRng;
use rangetree::{Range, RangeTree};
use std::time::Instant;

/// Key space: 0..1_000_000
const KEY_SPACE: u64 = 1_000_000;

/// Generate a random interval with length UP TO max_len
fn random_range<R: Rng>(rng: &mut R, max_len: u64) -> Range<u64> {
    let from = rng.random_range(0..(KEY_SPACE - max_len));
    let len = rng.random_range(0..=max_len);
    Range::new(from, from + len)
}

/// Benchmark search operations with different query sizes
fn bench_search(tree: &RangeTree<u64, Range<u64>>, queries: &[Range<u64>], percentage_str: &str) {
    let mut results = Vec::new();
    let mut found = 0usize;
    let start = Instant::now();

    for query in queries {
        tree.query_intersecting(query, &mut results);
        found += results.len();
    }

    let elapsed = start.elapsed();
    println!(
        "{} searches {}%: {}ms ({} hits)",
        queries.len(),
        percentage_str,
        elapsed.as_millis(),
        found
    );
}

fn main() {
    env_logger::init();

    println!("rangetree Centered Interval Tree Benchmark");
    println!("==========================================\n");

    let num_items = 1_000_000;
    let num_tests = 1_000;

    let seed = 95756739u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let items: Vec<Range<u64>> = (0..num_items).map(|_| random_range(&mut rng, 100)).collect();

    let mut queries_10 = Vec::new();
    let mut queries_1 = Vec::new();
    let mut queries_001 = Vec::new();
    for _ in 0..num_tests {
        queries_10.push(random_range(&mut rng, KEY_SPACE / 10));
        queries_1.push(random_range(&mut rng, KEY_SPACE / 100));
        queries_001.push(random_range(&mut rng, KEY_SPACE / 10_000));
    }

    println!("Building index with {} items...", num_items);
    let start = Instant::now();
    let tree = RangeTree::from_items(items);
    let build_time = start.elapsed();

    println!("Index built in {:.2}ms\n", build_time.as_secs_f64() * 1000.0);

    println!("Running query benchmarks:");
    println!("-----------------------");
    bench_search(&tree, &queries_10, "10");
    bench_search(&tree, &queries_1, "1");
    bench_search(&tree, &queries_001, "0.01");
    println!();
}
