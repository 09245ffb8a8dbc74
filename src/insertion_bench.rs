//! Insertion benchmark driver: cold-build timed trials with collision and
//! chain-step accounting, plus a reproducibility checksum.

use std::time::Instant;

use log::info;

use crate::chained_table::{ChainedTable, HashFn, Key};

/// Timed repetitions per combination.
pub const INSERTION_REPS: usize = 5;
/// Warm-up inserts are capped at this many keys.
const WARMUP_LIMIT: usize = 1000;
/// Keys sampled into the checksum on the first repetition.
const CHECKSUM_SAMPLE: usize = 10;
/// Modulus keeping the checksum small and stable.
const CHECKSUM_MOD: u64 = 1_000_003;

/// Aggregated result of one insertion experiment. Owns the table built in
/// the final repetition, which the search driver consumes.
#[derive(Debug)]
pub struct InsertionSummary {
    /// Mean wall time to build the table once, in milliseconds.
    pub mean_time_ms: f64,
    /// Mean bucket-level collisions per insert.
    pub mean_table_collisions: f64,
    /// Mean chain hops per insert.
    pub mean_list_steps: f64,
    /// Sum of sampled hash values mod 1_000_003.
    pub checksum: u32,
    /// Table from the last repetition, handed to the search driver.
    pub table: ChainedTable,
}

/// Build-and-time `INSERTION_REPS` fresh tables from `dataset`, returning
/// the fold of their collision/step/time counters and the final table.
///
/// Each repetition measures a cold build: a brand-new table populated from
/// an empty state, never incremental growth. A throwaway table absorbs up
/// to [`WARMUP_LIMIT`] inserts first so the timed loop does not pay
/// first-touch costs.
pub fn run_insertion_experiment(
    dataset: &[Key],
    table_size: usize,
    function: HashFn,
    seed: u64,
) -> InsertionSummary {
    info!("{} {} {}", function.label(), table_size, seed);

    let mut warmup = ChainedTable::new(table_size);
    for &key in dataset.iter().take(WARMUP_LIMIT) {
        let _ = warmup.insert(key, function);
    }

    let mut elapsed_ns: u64 = 0;
    let mut total_collisions: u64 = 0;
    let mut total_steps: u64 = 0;
    let mut checksum_acc: u64 = 0;
    let mut final_table = None;

    for rep in 0..INSERTION_REPS {
        let mut table = ChainedTable::new(table_size);

        let start = Instant::now();
        for (i, &key) in dataset.iter().enumerate() {
            if rep == 0 && i < CHECKSUM_SAMPLE {
                // Side computation, independent of the insert's own hash.
                checksum_acc += table.hash(key, function) as u64;
            }

            let outcome = table.insert(key, function);
            total_collisions += u64::from(outcome.table_collision);
            total_steps += u64::from(outcome.list_steps);
        }
        elapsed_ns += start.elapsed().as_nanos() as u64;

        final_table = Some(table);
    }

    let denom = (dataset.len() * INSERTION_REPS) as f64;
    let checksum = (checksum_acc % CHECKSUM_MOD) as u32;
    info!("checksum {checksum}");

    InsertionSummary {
        mean_time_ms: elapsed_ns as f64 / (1_000_000.0 * INSERTION_REPS as f64),
        mean_table_collisions: total_collisions as f64 / denom,
        mean_list_steps: total_steps as f64 / denom,
        checksum,
        table: final_table.unwrap_or_else(|| ChainedTable::new(table_size)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generate_dataset;

    #[test]
    fn retained_table_holds_whole_dataset() {
        let dataset = generate_dataset(500, 137);
        let summary = run_insertion_experiment(&dataset, 101, HashFn::Division, 137);
        assert_eq!(summary.table.len(), 500);
    }

    #[test]
    fn checksum_is_deterministic() {
        let dataset = generate_dataset(200, 271_828);
        let a = run_insertion_experiment(&dataset, 1009, HashFn::Folding, 271_828);
        let b = run_insertion_experiment(&dataset, 1009, HashFn::Folding, 271_828);
        assert_eq!(a.checksum, b.checksum);
    }

    #[test]
    fn checksum_matches_sampled_hashes() {
        let dataset = generate_dataset(50, 7);
        let summary = run_insertion_experiment(&dataset, 1009, HashFn::Multiplication, 7);

        let probe = ChainedTable::new(1009);
        let expected: u64 = dataset
            .iter()
            .take(10)
            .map(|&k| probe.hash(k, HashFn::Multiplication) as u64)
            .sum();
        assert_eq!(summary.checksum, (expected % 1_000_003) as u32);
    }

    #[test]
    fn collision_means_are_reproducible() {
        let dataset = generate_dataset(1000, 314_159);
        let a = run_insertion_experiment(&dataset, 1009, HashFn::Division, 314_159);
        let b = run_insertion_experiment(&dataset, 1009, HashFn::Division, 314_159);
        assert_eq!(a.mean_table_collisions, b.mean_table_collisions);
        assert_eq!(a.mean_list_steps, b.mean_list_steps);
    }

    #[test]
    fn all_keys_colliding_in_tiny_table() {
        // m=1 forces every insert after the first to collide.
        let dataset = generate_dataset(100, 1);
        let summary = run_insertion_experiment(&dataset, 1, HashFn::Division, 1);
        assert_eq!(summary.mean_table_collisions, 99.0 / 100.0);
        assert_eq!(summary.table.len(), 100);
    }
}
