//! CSV rendering of result records and the output sinks that consume them.
//!
//! Sinks are glue: the experiment core only produces [`ResultRecord`]s.
//! The file sink is best-effort and degrades to stream-only output rather
//! than aborting a multi-minute run over an unwritable path.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::chained_table::HashFn;

pub const CSV_HEADER: &str =
    "m,n,func,seed,ins_ms,coll_tbl,coll_lst,find_ms_hits,find_ms_misses,cmp_hits,cmp_misses,checksum";

/// One row of the experiment output, field order fixed by [`CSV_HEADER`].
#[derive(Debug, Clone, Copy)]
pub struct ResultRecord {
    pub table_size: usize,
    pub dataset_size: usize,
    pub function: HashFn,
    pub seed: u64,
    pub insert_ms: f64,
    pub table_collisions: f64,
    pub list_steps: f64,
    pub hit_ms: f64,
    pub miss_ms: f64,
    pub hit_comparisons: f64,
    pub miss_comparisons: f64,
    pub checksum: u32,
}

impl ResultRecord {
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            self.table_size,
            self.dataset_size,
            self.function,
            self.seed,
            self.insert_ms,
            self.table_collisions,
            self.list_steps,
            self.hit_ms,
            self.miss_ms,
            self.hit_comparisons,
            self.miss_comparisons,
            self.checksum,
        )
    }
}

/// CSV writer over any `io::Write` target.
pub struct CsvWriter<W: Write> {
    out: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{CSV_HEADER}")
    }

    pub fn write_record(&mut self, record: &ResultRecord) -> io::Result<()> {
        writeln!(self.out, "{}", record.to_csv_row())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Best-effort persisted copy of the CSV stream. Open failure is logged
/// once and every later write becomes a no-op.
pub struct FileReport {
    path: PathBuf,
    writer: Option<CsvWriter<BufWriter<File>>>,
}

impl FileReport {
    pub fn create(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let writer = match File::create(&path) {
            Ok(file) => Some(CsvWriter::new(BufWriter::new(file))),
            Err(err) => {
                warn!("could not create {}: {err}; results go to stdout only", path.display());
                None
            }
        };
        Self { path, writer }
    }

    pub fn write_header(&mut self) {
        if let Some(writer) = &mut self.writer {
            if let Err(err) = writer.write_header() {
                warn!("write to {} failed: {err}", self.path.display());
                self.writer = None;
            }
        }
    }

    pub fn write_record(&mut self, record: &ResultRecord) {
        if let Some(writer) = &mut self.writer {
            if let Err(err) = writer.write_record(record) {
                warn!("write to {} failed: {err}", self.path.display());
                self.writer = None;
            }
        }
    }

    /// Flush and report where the results went.
    pub fn finish(mut self) {
        if let Some(writer) = self.writer.take() {
            let mut inner = writer.into_inner();
            if let Err(err) = inner.flush() {
                warn!("flush of {} failed: {err}", self.path.display());
            } else {
                info!("results saved to: {}", self.path.display());
            }
        }
    }
}
