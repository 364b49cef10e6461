//! Batch CSV reader with iterator interface
//!
//! Streams a CSV file in fixed-size batches. The first record is taken as the
//! header and is delivered with every batch instead of as data.
//!
//! # Design
//!
//! [`BatchReader`] is a pull-based, finite sequence: nothing is read until the
//! caller asks for the next batch, and the caller may stop at any point by
//! dropping the reader, which closes the file. [`BatchReader::restart`] reopens
//! the file for another pass.
//!
//! ```text
//! Unopened → HeaderRead → Accumulating ⇄ DeliverBatch → Drained
//!                                                         ↓
//!                                          DeliverFinalPartial (if rows left)
//!                                                         ↓
//!                                                       Closed
//! ```
//!
//! ```no_run
//! use csv_file_reader::io::read_batches;
//!
//! let reader = read_batches("SaleRecords.csv", 100).unwrap();
//! for batch in reader {
//!     match batch {
//!         Ok(batch) => println!("{} rows under {:?}", batch.len(), batch.header()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Wrong extension and zero batch size are refused before the file is opened
//! - A missing or unopenable file, or a directory, is logged and returned by
//!   [`read_batches`] as `FileNotFound`
//! - Any later failure is logged and yielded once as `PartialRead` with the
//!   rows of the unfinished batch; the reader is exhausted afterwards and the
//!   unfinished batch is never delivered as a batch

use crate::io::csv_format::{ensure_csv_path, log_failure, open_csv, partial_read, record_to_row};
use crate::types::{Batch, CsvReadError, Header, Row};
use csv::StringRecord;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const OPERATION: &str = "read_batch";

/// Upper bound on rows reserved up front, whatever the batch size
const MAX_PREALLOCATED_ROWS: usize = 4096;

/// Where a pass over the file currently stands
#[derive(Debug)]
enum State {
    /// File open, header not read yet
    Unopened,
    /// Header read, data rows being accumulated
    Reading(Arc<Header>),
    /// End of file or an error was reached; the file is closed
    Closed,
}

/// Batch CSV reader
///
/// Yields `Result<Batch, CsvReadError>` for each batch of the file. Full
/// batches hold exactly `batch_size` rows; only the last one may be shorter.
#[derive(Debug)]
pub struct BatchReader {
    path: PathBuf,
    batch_size: usize,
    reader: Option<csv::Reader<File>>,
    state: State,
    header: Option<Arc<Header>>,
    record: StringRecord,
}

/// Open a CSV file for batch reading
///
/// Validation happens in this order, all before the file is touched:
/// 1. the path must end with `.csv` (case-insensitive)
/// 2. `batch_size` must be greater than 0
///
/// # Returns
///
/// * `Ok(BatchReader)` positioned before the header
/// * `Err(CsvReadError)` if validation fails or the file cannot be opened
pub fn read_batches(
    path: impl AsRef<Path>,
    batch_size: usize,
) -> Result<BatchReader, CsvReadError> {
    let path = path.as_ref();
    ensure_csv_path(path)?;
    if batch_size == 0 {
        return Err(CsvReadError::InvalidBatchSize { value: batch_size });
    }

    let reader = open_logged(path)?;
    Ok(BatchReader {
        path: path.to_path_buf(),
        batch_size,
        reader: Some(reader),
        state: State::Unopened,
        header: None,
        record: StringRecord::new(),
    })
}

fn open_logged(path: &Path) -> Result<csv::Reader<File>, CsvReadError> {
    open_csv(path).inspect_err(|e| log_failure(OPERATION, e))
}

impl BatchReader {
    /// The file being read
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The header, once the first batch has been requested
    ///
    /// `None` before the first call to `next()` and for an empty file.
    pub fn header(&self) -> Option<&Header> {
        self.header.as_deref()
    }

    /// Reopen the file and start over from the header
    pub fn restart(&mut self) -> Result<(), CsvReadError> {
        // Close the current handle before opening a new one
        self.reader = None;
        self.state = State::Closed;
        self.header = None;

        self.reader = Some(open_logged(&self.path)?);
        self.state = State::Unopened;
        Ok(())
    }

    /// Read the next record into `self.record`
    ///
    /// `Ok(false)` at end of file or once the reader has been closed.
    fn read_next(&mut self) -> Result<bool, csv::Error> {
        match self.reader.as_mut() {
            Some(reader) => reader.read_record(&mut self.record),
            None => Ok(false),
        }
    }

    fn close(&mut self) {
        self.reader = None;
        self.state = State::Closed;
    }

    fn fail(&mut self, rows: Vec<Row>, cause: csv::Error) -> CsvReadError {
        self.close();
        let err = partial_read(&self.path, rows, cause);
        log_failure(OPERATION, &err);
        err
    }

    /// Take the first record as the header; `Ok(false)` for an empty file
    fn read_header(&mut self) -> Result<bool, CsvReadError> {
        match self.read_next() {
            Ok(true) => {
                let header = Arc::new(record_to_row(&self.record));
                debug!(path = %self.path.display(), columns = header.len(), "read csv header");
                self.header = Some(Arc::clone(&header));
                self.state = State::Reading(header);
                Ok(true)
            }
            Ok(false) => {
                self.close();
                Ok(false)
            }
            Err(e) => Err(self.fail(Vec::new(), e)),
        }
    }
}

impl Iterator for BatchReader {
    type Item = Result<Batch, CsvReadError>;

    /// Get the next batch of rows
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Batch))` - a full batch, or the final partial batch
    /// * `Some(Err(CsvReadError::PartialRead))` - the read failed; yielded once
    /// * `None` - the file is exhausted, empty, or holds only a header
    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Unopened) {
            match self.read_header() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
        let header = match &self.state {
            State::Reading(header) => Arc::clone(header),
            State::Unopened | State::Closed => return None,
        };

        let mut rows = Vec::with_capacity(self.batch_size.min(MAX_PREALLOCATED_ROWS));
        while rows.len() < self.batch_size {
            match self.read_next() {
                Ok(true) => rows.push(record_to_row(&self.record)),
                Ok(false) => {
                    self.close();
                    break;
                }
                Err(e) => return Some(Err(self.fail(rows, e))),
            }
        }

        if rows.is_empty() {
            return None;
        }
        Some(Ok(Batch::new(header, rows)))
    }
}

impl std::iter::FusedIterator for BatchReader {}
