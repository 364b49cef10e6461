// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::{CliArgs, LogLevel};

use crate::io::{read_all, read_batches};
use crate::types::CsvReadError;
use clap::Parser;
use std::io::Write;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints a message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the global tracing subscriber writing to stderr
///
/// `RUST_LOG` overrides the level given on the command line.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_file_reader={}", level.as_filter())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Describe a read error for the command line
///
/// Argument problems are told apart from failures of the file itself.
fn describe(err: CsvReadError) -> String {
    if err.is_validation() {
        format!("Invalid input: {}", err)
    } else {
        format!("Read failed: {}", err)
    }
}

/// Run the command described by `args`, writing results to `output`
///
/// Without a batch size every row is written back out as CSV. With one, the
/// header line is written first, followed by one `batch <i>: <n> rows` line
/// per batch.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), String> {
    match args.batch_size {
        None => {
            let rows = read_all(&args.input_file).map_err(describe)?;
            // Rows may differ in length; write them back as they were read
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_writer(output);
            for row in &rows {
                writer
                    .write_record(row)
                    .map_err(|e| format!("Failed to write row: {}", e))?;
            }
            writer
                .flush()
                .map_err(|e| format!("Failed to flush output: {}", e))?;
            info!(rows = rows.len(), "finished reading csv file");
        }
        Some(batch_size) => {
            let mut reader =
                read_batches(&args.input_file, batch_size).map_err(describe)?;
            let mut delivered = 0;
            for batch in reader.by_ref() {
                let batch = batch.map_err(describe)?;
                if delivered == 0 {
                    writeln!(output, "header: {}", batch.header().join(","))
                        .map_err(|e| format!("Failed to write output: {}", e))?;
                }
                delivered += 1;
                writeln!(output, "batch {}: {} rows", delivered, batch.len())
                    .map_err(|e| format!("Failed to write output: {}", e))?;
            }
            info!(batches = delivered, batch_size = reader.batch_size(), "finished reading csv file in batches");
        }
    }
    Ok(())
}
