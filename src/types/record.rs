//! Row, header and batch types
//!
//! All values stay text: a row is the fields of one CSV record in file order,
//! with no type coercion.

use std::sync::Arc;

/// One parsed CSV record as an ordered list of text fields
pub type Row = Vec<String>;

/// The first record of a batch-mode read, held apart from the data rows
pub type Header = Row;

/// A bounded group of rows delivered together with the header
///
/// The header is shared by every batch of one pass over the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    header: Arc<Header>,
    rows: Vec<Row>,
}

impl Batch {
    /// Create a batch from a shared header and its rows
    pub fn new(header: Arc<Header>, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// The header captured from the first line of the file
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The data rows of this batch, in file order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows in this batch
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the batch, keeping only its rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}
