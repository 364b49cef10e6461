//! CSV File Reader Library
//! # Overview
//!
//! This library loads CSV files into memory as rows of text fields, either
//! whole or as a pull-based sequence of fixed-size batches.
//!
//! # Architecture
//!
//! - [`types`] - Row, Header, Batch and the [`CsvReadError`] type
//! - [`io`] - Stateless read functions:
//!   - [`io::read_all`] - every record of the file, first line included
//!   - [`io::read_batches`] - header plus batches of data rows
//! - [`core`](self::core) - [`CsvFileReader`], a reader bound to a settable path with a
//!   callback-based batch mode
//! - [`cli`] - Command-line arguments, logging setup and the command runner
//!
//! # Read Rules
//!
//! - Only paths ending in `.csv` (any case) are read; others are refused
//!   before the file is opened
//! - Files are decoded as UTF-8, comma-delimited, with standard quoting
//! - A missing file fails with [`CsvReadError::FileNotFound`]
//! - Any other failure fails with [`CsvReadError::PartialRead`], which keeps
//!   the rows read before the failure
//! - Failures coming from the file are logged through `tracing`

pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use self::core::CsvFileReader;
pub use io::{check_file_type, read_all, read_batches, BatchReader};
pub use types::{Batch, CsvReadError, Header, Row};
