//! CSV File Reader CLI
//!
//! Command-line front end for reading CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- records.csv > copy.csv
//! cargo run -- --batch-size 100 records.csv
//! cargo run -- --log-level debug --batch-size 12 records.csv
//! ```
//!
//! Without `--batch-size` every row, the first one included, is written to
//! stdout as CSV. With it, the header and one summary line per batch are
//! written instead.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (wrong extension, file not found, read failure, etc.)

use csv_file_reader::cli;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.log_level);

    let mut output = std::io::stdout().lock();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
