// src/table.rs
//
// Table shapes passed between pipeline stages.
//
// - RawTable: what the HTML reader saw. Cells may be absent (`None`).
// - SeasonTable: one normalized season. Every cell present; rank column gone.

use std::collections::BTreeSet;

use crate::config::consts::{COL_POS, COL_TEAM};
use crate::error::{Error, Result};

/// Header + rows as read off the page. Every row is exactly `headers.len()` wide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Pads short rows with absent cells and truncates long ones to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, None);
                r
            })
            .collect();
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::MissingColumn(s!(name)))
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeasonTable {
    pub year: u32,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SeasonTable {
    pub fn with(year: u32, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { year, headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like `column_index`, but a missing column is a named error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::MissingColumn(s!(name)))
    }

    /// Cell by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let ci = self.column_index(column)?;
        self.rows.get(row)?.get(ci).map(|c| c.as_str())
    }

    /// Distinct values of one column, sorted.
    pub fn unique_values(&self, column: &str) -> Result<Vec<String>> {
        let ci = self.require_column(column)?;
        let set: BTreeSet<&str> = self
            .rows
            .iter()
            .filter_map(|r| r.get(ci).map(|c| c.as_str()))
            .collect();
        Ok(set.into_iter().map(String::from).collect())
    }

    /// Team codes present this season, sorted (includes `TOT` rows for traded players).
    pub fn unique_teams(&self) -> Result<Vec<String>> {
        self.unique_values(COL_TEAM)
    }

    /// Position strings present this season, sorted. May include combined ones like `PF-C`.
    pub fn unique_positions(&self) -> Result<Vec<String>> {
        self.unique_values(COL_POS)
    }

    /// Columns whose every cell parses as a number. Used for alignment only.
    pub fn numeric_columns(&self) -> Vec<bool> {
        (0..self.ncols())
            .map(|ci| {
                !self.rows.is_empty()
                    && self.rows.iter().all(|r| {
                        r.get(ci).map(|c| c.parse::<f64>().is_ok()).unwrap_or(false)
                    })
            })
            .collect()
    }

    /// Keep only the given rows (by index, in the given order).
    pub fn project_rows(&self, row_ix: &[usize]) -> SeasonTable {
        let rows = row_ix
            .iter()
            .filter_map(|&ix| self.rows.get(ix).cloned())
            .collect();
        SeasonTable::with(self.year, self.headers.clone(), rows)
    }
}
