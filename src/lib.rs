/* -------- Public modules -------- */
pub mod chained_table;
pub mod dataset;
pub mod experiment;
pub mod insertion_bench;
pub mod logger;
pub mod report;
pub mod search_bench;

/* -------- Re-exports -------- */
pub use chained_table::{ChainedTable, HashFn, InsertOutcome, Key, SearchOutcome};
pub use dataset::{generate_dataset, KeyStream};
pub use experiment::{run_combination, run_grid, DatasetSpec, ExperimentGrid};
pub use insertion_bench::{run_insertion_experiment, InsertionSummary};
pub use report::{CsvWriter, FileReport, ResultRecord, CSV_HEADER};
pub use search_bench::{build_queries, run_search_experiment, Query, SearchSummary};

/* -------- Error type -------- */
#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(err) => write!(f, "report output failed: {err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err)
    }
}
