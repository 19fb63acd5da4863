//! FILENAME: core/engine/src/table.rs
//! PURPOSE: Ordered tabular data with a fixed column schema.
//! CONTEXT: A `Table` is the raw data shape that enters the pipeline:
//! a header (column names) plus data rows of values. The name -> index
//! lookup is built once at construction so stages never re-scan the
//! header row.

use crate::cell::CellValue;
use std::collections::HashMap;

/// An ordered sequence of rows sharing one column schema.
/// The header is the schema itself, not a data row.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    /// Column name -> position, built once. First occurrence wins when a
    /// workbook carries duplicate header texts.
    index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(columns.len());
        for (pos, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(pos);
        }
        Table {
            columns,
            index,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Position of a column by header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Append a data row, padding or truncating to the schema width.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}
