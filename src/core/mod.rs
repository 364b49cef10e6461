//! Core module
//!
//! - `csv_file_reader` - Path-holding reader over the stateless read functions

pub mod csv_file_reader;

pub use csv_file_reader::CsvFileReader;
