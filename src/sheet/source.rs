//! Loading transect files into sheets
//!
//! Workbooks go through the [`WorkbookSource`] seam so the parsers can be
//! driven from in-memory fixtures; delimited text is read with polars.

use super::Sheet;
use crate::error::{DepthError, Result};
use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Provides the first worksheet of a workbook file
pub trait WorkbookSource: Send + Sync {
    fn first_sheet(&self, path: &Path) -> Result<Sheet>;
}

/// Reads workbooks from disk with calamine (xlsx, xlsm, xls, ods)
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineWorkbooks;

impl WorkbookSource for CalamineWorkbooks {
    fn first_sheet(&self, path: &Path) -> Result<Sheet> {
        // Blocking read; callers run this under spawn_blocking
        let mut workbook = open_workbook_auto(path).map_err(|e| DepthError::Workbook {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DepthError::EmptyWorkbook {
                path: path.to_path_buf(),
            })?
            .map_err(|e| DepthError::Workbook {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let sheet = Sheet::from_range(&range);
        debug!(
            "Read {} rows x {} columns from {}",
            sheet.height(),
            sheet.width(),
            path.display()
        );
        Ok(sheet)
    }
}

/// Serves pre-built sheets keyed by path
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkbooks {
    sheets: HashMap<PathBuf, Sheet>,
}

impl InMemoryWorkbooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, sheet: Sheet) {
        self.sheets.insert(path.into(), sheet);
    }

    pub fn with_sheet(mut self, path: impl Into<PathBuf>, sheet: Sheet) -> Self {
        self.insert(path, sheet);
        self
    }
}

impl WorkbookSource for InMemoryWorkbooks {
    fn first_sheet(&self, path: &Path) -> Result<Sheet> {
        self.sheets
            .get(path)
            .cloned()
            .ok_or_else(|| DepthError::Workbook {
                path: path.to_path_buf(),
                reason: "no such workbook".to_string(),
            })
    }
}

/// Read a delimited-text file into a sheet: header in row 0, every value as text
pub fn read_delimited(path: &Path) -> Result<Sheet> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let header: Vec<Data> = df
        .get_columns()
        .iter()
        .map(|column| Data::String(column.name().to_string()))
        .collect();

    let mut rows = vec![header];
    rows.extend((0..df.height()).map(|_| Vec::with_capacity(df.width())));

    for column in df.get_columns() {
        let values = column.as_materialized_series().str()?;
        for (offset, value) in values.into_iter().enumerate() {
            rows[offset + 1].push(match value {
                Some(text) => Data::String(text.to_string()),
                None => Data::Empty,
            });
        }
    }

    debug!(
        "Read {} delimited rows with {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(Sheet::from_rows(rows))
}
