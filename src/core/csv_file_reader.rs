//! Path-holding CSV reader
//!
//! [`CsvFileReader`] keeps a configurable path and offers both read modes on
//! it. It holds no other state: every call re-opens the file through the
//! stateless functions in [`crate::io`].
//!
//! # Check Order
//!
//! 1. a path must be set (`MissingPath`)
//! 2. the path must end with `.csv` (`UnsupportedFileType`)
//! 3. the batch size must be positive (`InvalidBatchSize`, batch mode only)

use crate::io::{read_all, read_batches};
use crate::types::{CsvReadError, Header, Row};
use std::path::{Path, PathBuf};

/// CSV reader bound to a file path
///
/// # Examples
///
/// ```no_run
/// use csv_file_reader::CsvFileReader;
///
/// let reader = CsvFileReader::with_path("SaleRecords.csv");
/// reader
///     .read_batch(100, |header, rows| {
///         println!("{} columns, {} rows", header.len(), rows.len());
///     })
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvFileReader {
    path: Option<PathBuf>,
}

impl CsvFileReader {
    /// Create a reader with no path; set one before reading
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn clear_path(&mut self) {
        self.path = None;
    }

    fn require_path(&self) -> Result<&Path, CsvReadError> {
        self.path().ok_or(CsvReadError::MissingPath)
    }

    /// Read every record of the configured file, the first one included
    ///
    /// See [`crate::io::read_all`].
    pub fn read_all(&self) -> Result<Vec<Row>, CsvReadError> {
        read_all(self.require_path()?)
    }

    /// Read the configured file in batches of `batch_size` rows
    ///
    /// The first record is the header. `on_batch` is called synchronously
    /// with the header and each batch: full batches first, then one final
    /// partial batch if rows remain. It is never called for an empty or
    /// header-only file. A panic inside `on_batch` is not caught here.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - number of batches delivered
    /// * `Err(CsvReadError)` - the first error; no batch is delivered after it
    pub fn read_batch<F>(&self, batch_size: usize, mut on_batch: F) -> Result<usize, CsvReadError>
    where
        F: FnMut(&Header, &[Row]),
    {
        let mut delivered = 0;
        for batch in read_batches(self.require_path()?, batch_size)? {
            let batch = batch?;
            on_batch(batch.header(), batch.rows());
            delivered += 1;
        }
        Ok(delivered)
    }
}
