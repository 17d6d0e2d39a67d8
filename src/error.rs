//! Error handling for snow depth normalization.
//!
//! Every failure here aborts the run: there is no partial output and no
//! retry. Row-level problems (non-numeric depth or coordinates) are not
//! errors at all, the parsers drop those rows silently.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepthError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Failed to read workbook {path}: {reason}")]
    Workbook { path: PathBuf, reason: String },

    #[error("Workbook has no worksheets: {path}")]
    EmptyWorkbook { path: PathBuf },

    #[error("Failed to capture {path}: unsupported file format")]
    UnsupportedFormat { path: PathBuf },

    #[error("No parser registered for location directory '{name}'")]
    UnregisteredLocation { name: String },

    #[error("Column '{column}' not found in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid UTM zone '{value}' in {path}")]
    InvalidUtmZone { path: PathBuf, value: String },

    #[error("Cannot derive site from {path}: {reason}")]
    SiteNotDerivable { path: PathBuf, reason: String },

    #[error("File has no coordinate columns and is not a known exception: {path}")]
    UnexpectedCoordinatelessFile { path: PathBuf },

    #[error("Cannot parse survey date from directory name '{name}'")]
    InvalidSurveyDate { name: String },

    #[error("Expected directory layout not found at: {path}")]
    LayoutNotFound { path: PathBuf },

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DepthError {
    pub fn missing_column(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path: path.into(),
            column: column.into(),
        }
    }

    pub fn invalid_zone(path: impl Into<PathBuf>, value: impl Into<String>) -> Self {
        Self::InvalidUtmZone {
            path: path.into(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DepthError>;
