use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Read a CSV file whole or in batches
#[derive(Parser, Debug)]
#[command(name = "csv-file-reader")]
#[command(about = "Read a CSV file whole or in fixed-size batches", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Rows per batch; the whole file is printed when omitted
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Read in batches of SIZE rows after the header and print one summary line per batch"
    )]
    pub batch_size: Option<usize>,

    /// Log verbosity for messages written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: error, warn, info, debug or trace (RUST_LOG takes precedence)"
    )]
    pub log_level: LogLevel,
}

/// Available log levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
