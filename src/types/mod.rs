//! Types module
//!
//! Contains the data structures shared by both read modes:
//! - `record`: Row, Header and Batch
//! - `error`: Error type for every read operation

pub mod error;
pub mod record;

pub use error::CsvReadError;
pub use record::{Batch, Header, Row};
