//! String-cell table backing the merger. Columns keep their first-seen
//! order; cells are untyped CSV fields. Sorting is numeric-aware so a
//! numeric time column orders the way the telemetry writer produced it.

use crate::error::TelemetryResult;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LogTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Read a headered CSV file into a table.
    pub fn from_csv(path: &Path) -> TelemetryResult<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
        let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record: StringRecord = record?;
            let mut row: Vec<String> = record.iter().map(String::from).collect();
            // Ragged lines are padded so every row matches the header width.
            row.resize(columns.len(), String::new());
            rows.push(row);
        }
        Ok(Self { columns, rows })
    }

    /// Write the table as a headered CSV file, overwriting any existing file.
    pub fn write_csv(&self, path: &Path) -> TelemetryResult<()> {
        let mut writer = WriterBuilder::new().from_path(path)?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell lookup by column name. None if the column does not exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Row-wise concatenation with column-union semantics: columns missing
    /// from one side are filled with empty cells, new columns append in
    /// first-seen order.
    pub fn append(&mut self, other: LogTable) {
        for column in &other.columns {
            if self.column_index(column).is_none() {
                self.columns.push(column.clone());
                for row in &mut self.rows {
                    row.push(String::new());
                }
            }
        }
        let mapping: Vec<Option<usize>> = self
            .columns
            .iter()
            .map(|c| other.column_index(c))
            .collect();
        for source in other.rows {
            let row = mapping
                .iter()
                .map(|idx| idx.map(|i| source[i].clone()).unwrap_or_default())
                .collect();
            self.rows.push(row);
        }
    }

    /// Stable ascending sort on one column. Cells that both parse as f64
    /// compare numerically, anything else falls back to string order.
    /// Returns false (table untouched) if the column is absent.
    pub fn sort_by_column(&mut self, name: &str) -> bool {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        self.rows.sort_by(|a, b| compare_cells(&a[idx], &b[idx]));
        true
    }

    /// Remove a column and its cells. Returns false if it was absent.
    pub fn remove_column(&mut self, name: &str) -> bool {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        self.columns.remove(idx);
        for row in &mut self.rows {
            row.remove(idx);
        }
        true
    }

    /// Insert a column at the front. `values` must have one entry per row.
    pub fn insert_column_front(&mut self, name: &str, values: Vec<String>) {
        assert_eq!(values.len(), self.rows.len(), "one value per row");
        self.columns.insert(0, name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(0, value);
        }
    }
}

fn compare_cells(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.cmp(b),
    }
}
