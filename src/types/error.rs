//! Error types for the CSV file reader
//!
//! This module defines every error a read can end with. Errors are designed to
//! be descriptive enough to print directly on the command line.
//!
//! # Error Categories
//!
//! - **Validation Errors**: wrong file extension, zero batch size, missing path.
//!   These are raised before any file is opened.
//! - **File Errors**: the file does not exist.
//! - **Read Errors**: any other I/O or decoding failure. These keep the rows
//!   that were read before the failure so callers can tell a short file from
//!   an aborted read.

use crate::types::Row;
use thiserror::Error;

/// Main error type for CSV reads
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsvReadError {
    /// The path does not end with `.csv` (case-insensitive)
    #[error("only .csv files are accepted, current file is {path}")]
    UnsupportedFileType {
        /// The rejected path
        path: String,
    },

    /// Batch size must be strictly positive
    #[error("batch size must be greater than 0, current is {value}")]
    InvalidBatchSize {
        /// The rejected batch size
        value: usize,
    },

    /// A read was requested before any path was configured
    #[error("no file path has been set")]
    MissingPath,

    /// File not found at the specified path
    ///
    /// Logged, then returned to the caller with the original message.
    #[error("File not found: {path} ({message})")]
    FileNotFound {
        /// The path that was not found
        path: String,
        /// Message of the underlying I/O error
        message: String,
    },

    /// The read stopped part way through the file
    ///
    /// `rows` holds what was read before the failure. In batch mode these are
    /// the rows of the batch that was being filled and was never delivered.
    #[error("read of {path} aborted after {} rows: {cause}", .rows.len())]
    PartialRead {
        /// The file being read
        path: String,
        /// Rows read before the failure
        rows: Vec<Row>,
        /// Description of the underlying failure
        cause: String,
    },
}

impl CsvReadError {
    /// Rows recovered before a [`CsvReadError::PartialRead`], if any
    pub fn partial_rows(&self) -> Option<&[Row]> {
        match self {
            CsvReadError::PartialRead { rows, .. } => Some(rows),
            _ => None,
        }
    }

    /// Whether this error was raised by argument validation, before any I/O
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CsvReadError::UnsupportedFileType { .. }
                | CsvReadError::InvalidBatchSize { .. }
                | CsvReadError::MissingPath
        )
    }
}
