//! Spreadsheet access for transect files
//!
//! Raw exports are read into a [`Sheet`], a dense grid of cells addressed
//! from A1, so fixed cell positions in a file's header block can be used
//! directly. A [`Table`] is a header-indexed view over the rows below a
//! chosen header row.
//!
//! ## Architecture
//!
//! - [`cells`] - numeric and text coercion of individual cells
//! - [`source`] - workbook loading (`calamine`) and delimited-text loading (`polars`)

pub mod cells;
pub mod source;

pub use source::{CalamineWorkbooks, InMemoryWorkbooks, WorkbookSource, read_delimited};

use crate::error::{DepthError, Result};
use calamine::{Data, Range};
use std::collections::HashMap;
use std::path::Path;

static EMPTY: Data = Data::Empty;

/// Dense cell grid of one worksheet, row-major, starting at A1
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    rows: Vec<Vec<Data>>,
}

impl Sheet {
    /// Build a sheet from literal rows (ragged rows are allowed)
    pub fn from_rows(rows: Vec<Vec<Data>>) -> Self {
        Self { rows }
    }

    /// Copy a calamine range into a grid anchored at A1
    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((end_row, end_col)) = range.end() else {
            return Self::default();
        };

        let rows = (0..=end_row)
            .map(|row| {
                (0..=end_col)
                    .map(|col| range.get_value((row, col)).cloned().unwrap_or(Data::Empty))
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell at an absolute position; out-of-bounds cells are empty
    pub fn cell(&self, row: usize, col: usize) -> &Data {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Header-indexed view with the header at `header_row`
    ///
    /// Data cells holding one of the default missing-value markers read as empty.
    pub fn table(&self, header_row: usize) -> Table<'_> {
        Table::new(self, header_row, &[])
    }

    /// Header-indexed view treating `na_values` text cells as missing too
    pub fn table_with_na<'a>(&'a self, header_row: usize, na_values: &'a [&'a str]) -> Table<'a> {
        Table::new(self, header_row, na_values)
    }
}

/// Rows below a header row, addressed by column name
#[derive(Debug)]
pub struct Table<'a> {
    sheet: &'a Sheet,
    header_row: usize,
    names: Vec<String>,
    positions: HashMap<String, usize>,
    na_values: &'a [&'a str],
}

impl<'a> Table<'a> {
    fn new(sheet: &'a Sheet, header_row: usize, na_values: &'a [&'a str]) -> Self {
        let mut names = Vec::with_capacity(sheet.width());
        let mut positions = HashMap::new();

        for col in 0..sheet.width() {
            let base = cells::to_text(sheet.cell(header_row, col))
                .unwrap_or_else(|| format!("Unnamed: {}", col));

            // Duplicate headers get a numeric suffix, first occurrence keeps the bare name
            let mut name = base.clone();
            let mut suffix = 1;
            while positions.contains_key(&name) {
                name = format!("{}.{}", base, suffix);
                suffix += 1;
            }

            positions.insert(name.clone(), col);
            names.push(name);
        }

        Self {
            sheet,
            header_row,
            names,
            positions,
            na_values,
        }
    }

    /// Column names in sheet order
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Absolute column position of a named column
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Position of a required column, failing with the file path
    pub fn require(&self, name: &str, path: &Path) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| DepthError::missing_column(path, name))
    }

    /// Position of the first of several accepted spellings
    pub fn require_any(&self, names: &[&str], path: &Path) -> Result<usize> {
        names
            .iter()
            .find_map(|name| self.position(name))
            .ok_or_else(|| DepthError::missing_column(path, names.join(" | ")))
    }

    /// Data rows below the header
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> + '_ {
        (self.header_row + 1..self.sheet.height()).map(move |row| TableRow { table: self, row })
    }

    /// Data row by offset from the first data row
    pub fn row(&self, offset: usize) -> Option<TableRow<'_>> {
        let row = self.header_row + 1 + offset;
        (row < self.sheet.height()).then_some(TableRow { table: self, row })
    }

    fn is_na(&self, cell: &Data) -> bool {
        cells::is_na_marker(cell, self.na_values)
    }
}

/// One data row of a [`Table`]
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'t> {
    table: &'t Table<'t>,
    row: usize,
}

impl<'t> TableRow<'t> {
    /// Cell at an absolute column, with the table's missing-value markers applied
    pub fn cell(&self, col: usize) -> &'t Data {
        let cell = self.table.sheet.cell(self.row, col);
        if self.table.is_na(cell) { &EMPTY } else { cell }
    }

    pub fn numeric(&self, col: usize) -> Option<f64> {
        cells::to_numeric(self.cell(col))
    }

    pub fn text(&self, col: usize) -> Option<String> {
        cells::to_text(self.cell(col))
    }
}
