//! CSV output for the combined depth table
//!
//! The written table leads with an unnamed integer row index, keeps the
//! header row and leaves nulls as empty fields.

use crate::constants::ROW_INDEX_COLUMN;
use crate::error::Result;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use std::fs::File;
use std::path::PathBuf;
use tracing::debug;

/// Writes the combined frame to a single CSV file
#[derive(Debug, Clone)]
pub struct DepthsWriter {
    output_path: PathBuf,
}

impl DepthsWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Write the frame, creating the output directory if needed
    ///
    /// Blocking; the processor calls this under `spawn_blocking`.
    pub fn write(&self, frame: DataFrame) -> Result<usize> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut indexed = frame.with_row_index(ROW_INDEX_COLUMN.into(), None)?;
        let rows = indexed.height();

        let mut file = File::create(&self.output_path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut indexed)?;

        debug!("Wrote {} rows to {}", rows, self.output_path.display());
        Ok(rows)
    }
}
