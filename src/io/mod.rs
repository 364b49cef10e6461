//! I/O module
//!
//! Handles opening and parsing CSV files.
//!
//! # Components
//!
//! - `csv_format` - Extension check, parser configuration, error mapping
//! - `sync_reader` - Whole-file reader
//! - `batch_reader` - Fixed-size batch reader with iterator interface

pub mod batch_reader;
pub mod csv_format;
pub mod sync_reader;

pub use batch_reader::{read_batches, BatchReader};
pub use csv_format::check_file_type;
pub use sync_reader::read_all;
