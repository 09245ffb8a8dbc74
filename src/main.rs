use std::io;

use hash_experiments::logger::initialize_logger;
use hash_experiments::{run_grid, CsvWriter, ExperimentGrid, FileReport, ReportError};

const CSV_PATH: &str = "hash_results.csv";

fn main() -> Result<(), ReportError> {
    initialize_logger();

    let grid = ExperimentGrid::standard();

    let mut stdout = CsvWriter::new(io::stdout().lock());
    let mut file = FileReport::create(CSV_PATH);

    stdout.write_header()?;
    file.write_header();

    let mut result = Ok(());
    run_grid(&grid, |record| {
        if result.is_ok() {
            result = stdout.write_record(record);
        }
        file.write_record(record);
    });
    result?;

    file.finish();
    Ok(())
}
