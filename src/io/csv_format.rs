//! CSV format handling shared by both read modes
//!
//! This module centralizes the file-level concerns of a read:
//! - The extension check that gates every read
//! - Opening the file and configuring the CSV parser
//! - Converting parsed records into rows
//! - Mapping I/O failures onto [`CsvReadError`] and logging them
//!
//! # Parser Configuration
//!
//! - Comma delimiter, standard quoting (embedded newlines inside quotes)
//! - No header handling by the parser: the first record is data unless the
//!   caller takes it as a header
//! - Flexible field counts, fields are kept untrimmed
//! - UTF-8 decoding, invalid UTF-8 is a read failure

use crate::types::{CsvReadError, Row};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use tracing::error;

/// Component name attached to every log entry emitted by a read
pub const COMPONENT: &str = "CsvFileReader";

/// Check that a path names a `.csv` file, ignoring case
///
/// Only the file name is inspected; the filesystem is never touched.
pub fn check_file_type(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".csv")
}

/// Fail with [`CsvReadError::UnsupportedFileType`] unless the path is a `.csv` file
pub fn ensure_csv_path(path: &Path) -> Result<(), CsvReadError> {
    if check_file_type(path) {
        Ok(())
    } else {
        Err(CsvReadError::UnsupportedFileType {
            path: path.display().to_string(),
        })
    }
}

/// Open a CSV file for reading
///
/// A path that is missing, cannot be opened for lack of permission, or is not
/// a regular file (a directory, for instance) counts as not found.
///
/// # Returns
///
/// * `Ok(csv::Reader<File>)` if the file was opened
/// * `Err(CsvReadError::FileNotFound)` if no readable regular file exists at `path`
/// * `Err(CsvReadError::PartialRead)` with no rows for any other open failure
pub fn open_csv(path: &Path) -> Result<csv::Reader<File>, CsvReadError> {
    let not_found = |message: String| CsvReadError::FileNotFound {
        path: path.display().to_string(),
        message,
    };
    let other_failure = |cause: String| CsvReadError::PartialRead {
        path: path.display().to_string(),
        rows: Vec::new(),
        cause,
    };

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => not_found(e.to_string()),
        _ => other_failure(e.to_string()),
    })?;
    let metadata = file.metadata().map_err(|e| other_failure(e.to_string()))?;
    if !metadata.is_file() {
        return Err(not_found("not a regular file".to_string()));
    }

    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .buffer_capacity(8 * 1024)
        .from_reader(file))
}

/// Convert a parsed record into a row of owned fields
pub fn record_to_row(record: &StringRecord) -> Row {
    record.iter().map(str::to_owned).collect()
}

/// Build the error for a failure in the middle of a file
pub fn partial_read(path: &Path, rows: Vec<Row>, cause: csv::Error) -> CsvReadError {
    CsvReadError::PartialRead {
        path: path.display().to_string(),
        rows,
        cause: cause.to_string(),
    }
}

/// Log a caught read failure
///
/// Validation errors are returned without logging, so callers only log what
/// came out of the file itself.
pub fn log_failure(operation: &str, err: &CsvReadError) {
    error!(component = COMPONENT, operation, error = %err, "errors while reading csv file");
}
