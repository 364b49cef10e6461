//! Whole-file CSV reader
//!
//! Loads an entire CSV file into memory as rows of text fields. Every record,
//! including the first one, is treated as data.
//!
//! ```no_run
//! use csv_file_reader::io::read_all;
//!
//! match read_all("SaleRecords.csv") {
//!     Ok(rows) => println!("read {} rows", rows.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! # Error Handling
//!
//! - Wrong extension is refused before the file is opened
//! - A missing or unopenable file, or a directory, is logged and returned as
//!   `FileNotFound`
//! - Any other failure is logged and returned as `PartialRead`, carrying the
//!   rows read up to that point

use crate::io::csv_format::{ensure_csv_path, log_failure, open_csv, partial_read, record_to_row};
use crate::types::{CsvReadError, Row};
use csv::StringRecord;
use std::path::Path;
use tracing::debug;

/// Read every record of a CSV file
///
/// Each call opens the file afresh; nothing is cached between calls. The file
/// handle is closed before this function returns, on every path.
///
/// # Arguments
///
/// * `path` - Path to a file ending in `.csv` (case-insensitive)
///
/// # Returns
///
/// * `Ok(Vec<Row>)` with all records in file order
/// * `Err(CsvReadError)` - see the module docs
pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<Row>, CsvReadError> {
    let path = path.as_ref();
    ensure_csv_path(path)?;

    let result = read_rows(path);
    if let Err(e) = &result {
        log_failure("read_all", e);
    }
    result
}

fn read_rows(path: &Path) -> Result<Vec<Row>, CsvReadError> {
    let mut reader = open_csv(path)?;
    let mut record = StringRecord::new();
    let mut rows = Vec::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => rows.push(record_to_row(&record)),
            Ok(false) => break,
            Err(e) => return Err(partial_read(path, rows, e)),
        }
    }

    debug!(path = %path.display(), rows = rows.len(), "read csv file");
    Ok(rows)
}
