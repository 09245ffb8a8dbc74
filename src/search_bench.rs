//! Search benchmark driver: builds a shuffled hit/miss workload against a
//! populated table and times each lookup individually.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chained_table::{ChainedTable, HashFn, Key};
use crate::dataset::KeyStream;

/// Timed repetitions per combination.
pub const SEARCH_REPS: usize = 5;

/// One lookup of the workload. Keeping the key and its hit flag in one
/// struct means shuffling can never desynchronize them.
#[derive(Debug, Clone, Copy)]
pub struct Query {
    pub key: Key,
    pub hit: bool,
}

/// Aggregated result of one search experiment, split by category.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchSummary {
    pub mean_hit_time_ms: f64,
    pub mean_miss_time_ms: f64,
    pub mean_hit_comparisons: f64,
    pub mean_miss_comparisons: f64,
}

/// Build the query workload: the first `n/2` entries copy the dataset
/// (guaranteed hits), the rest are rejection-sampled keys verified absent
/// from `table`. The whole array is then Fisher-Yates shuffled.
///
/// Odd `n` gives the misses one extra slot (integer halving).
pub fn build_queries(
    table: &ChainedTable,
    dataset: &[Key],
    function: HashFn,
    seed: u64,
) -> Vec<Query> {
    let n = dataset.len();
    let half = n / 2;
    let mut queries = Vec::with_capacity(n);

    for &key in &dataset[..half] {
        queries.push(Query { key, hit: true });
    }

    let mut sampler = KeyStream::new(seed + 1);
    while queries.len() < n {
        let candidate = sampler.next_key();
        if !table.search(candidate, function).found {
            queries.push(Query { key: candidate, hit: false });
        }
    }

    let mut shuffle_rng = StdRng::seed_from_u64(seed + 2);
    for j in (1..n).rev() {
        let r = shuffle_rng.gen_range(0..=j);
        queries.swap(j, r);
    }

    queries
}

/// Run `SEARCH_REPS` passes over the shuffled workload, timing every
/// search call on its own, and fold the per-category counters into a
/// [`SearchSummary`].
pub fn run_search_experiment(
    table: &ChainedTable,
    dataset: &[Key],
    function: HashFn,
    seed: u64,
) -> SearchSummary {
    let queries = build_queries(table, dataset, function, seed);

    let mut hit_ns: u64 = 0;
    let mut miss_ns: u64 = 0;
    let mut hit_comparisons: u64 = 0;
    let mut miss_comparisons: u64 = 0;
    let mut hits: u64 = 0;
    let mut misses: u64 = 0;

    for _ in 0..SEARCH_REPS {
        for query in &queries {
            let start = Instant::now();
            let outcome = table.search(query.key, function);
            let dt = start.elapsed().as_nanos() as u64;

            if query.hit {
                hit_ns += dt;
                hit_comparisons += u64::from(outcome.comparisons);
                hits += 1;
            } else {
                miss_ns += dt;
                miss_comparisons += u64::from(outcome.comparisons);
                misses += 1;
            }
        }
    }

    let mut summary = SearchSummary::default();
    if hits > 0 {
        summary.mean_hit_time_ms = hit_ns as f64 / (1_000_000.0 * hits as f64);
        summary.mean_hit_comparisons = hit_comparisons as f64 / hits as f64;
    }
    if misses > 0 {
        summary.mean_miss_time_ms = miss_ns as f64 / (1_000_000.0 * misses as f64);
        summary.mean_miss_comparisons = miss_comparisons as f64 / misses as f64;
    }
    summary
}
