//! Experiment orchestration: the (table size x dataset x function) grid
//! and the driver loop that turns each combination into a result record.

use crate::chained_table::{HashFn, Key};
use crate::dataset::generate_dataset;
use crate::insertion_bench::run_insertion_experiment;
use crate::report::ResultRecord;
use crate::search_bench::run_search_experiment;

/// One (dataset size, seed) pairing. The standard grid pairs these by
/// position; they are never crossed.
#[derive(Debug, Clone, Copy)]
pub struct DatasetSpec {
    pub size: usize,
    pub seed: u64,
}

/// The full experiment matrix as a value, so tests can run reduced grids.
#[derive(Debug, Clone)]
pub struct ExperimentGrid {
    pub table_sizes: Vec<usize>,
    pub datasets: Vec<DatasetSpec>,
    pub functions: Vec<HashFn>,
}

impl ExperimentGrid {
    /// The fixed 3 x 3 x 3 matrix: 27 result rows.
    pub fn standard() -> Self {
        Self {
            table_sizes: vec![1009, 10_007, 100_003],
            datasets: vec![
                DatasetSpec { size: 1000, seed: 137 },
                DatasetSpec { size: 10_000, seed: 271_828 },
                DatasetSpec { size: 100_000, seed: 314_159 },
            ],
            functions: HashFn::ALL.to_vec(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.table_sizes.len() * self.datasets.len() * self.functions.len()
    }
}

/// Run one combination end to end. The insertion summary's final table is
/// handed to the search driver and dropped once the record exists.
pub fn run_combination(
    table_size: usize,
    dataset: &DatasetSpec,
    function: HashFn,
) -> ResultRecord {
    let keys = generate_dataset(dataset.size, dataset.seed);
    run_with_keys(&keys, table_size, dataset, function)
}

fn run_with_keys(
    keys: &[Key],
    table_size: usize,
    dataset: &DatasetSpec,
    function: HashFn,
) -> ResultRecord {
    let insertion = run_insertion_experiment(keys, table_size, function, dataset.seed);
    let search = run_search_experiment(&insertion.table, keys, function, dataset.seed);

    ResultRecord {
        table_size,
        dataset_size: dataset.size,
        function,
        seed: dataset.seed,
        insert_ms: insertion.mean_time_ms,
        table_collisions: insertion.mean_table_collisions,
        list_steps: insertion.mean_list_steps,
        hit_ms: search.mean_hit_time_ms,
        miss_ms: search.mean_miss_time_ms,
        hit_comparisons: search.mean_hit_comparisons,
        miss_comparisons: search.mean_miss_comparisons,
        checksum: insertion.checksum,
    }
}

/// Walk the grid (table size outer, dataset middle, function inner) and
/// stream every record to `sink` as soon as it exists. Each dataset is
/// generated once per (size, seed) pair and shared by the three functions.
pub fn run_grid<F>(grid: &ExperimentGrid, mut sink: F)
where
    F: FnMut(&ResultRecord),
{
    for &table_size in &grid.table_sizes {
        for dataset in &grid.datasets {
            let keys = generate_dataset(dataset.size, dataset.seed);
            for &function in &grid.functions {
                let record = run_with_keys(&keys, table_size, dataset, function);
                sink(&record);
            }
        }
    }
}
