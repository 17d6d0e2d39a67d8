//! Configuration for a normalization run.
//!
//! The defaults reproduce the fixed-constant behaviour: the binary run
//! without arguments reads the standard raw tree and writes `depths.csv`.

use crate::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_RAW_DIR, FRASER_COORDINATELESS_FILES};
use crate::error::{DepthError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global configuration for depth normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthsConfig {
    /// Root of the `<location>/<date>/Depth Transects/<file>` tree
    pub raw_dir: PathBuf,

    /// Destination of the combined CSV table
    pub output_path: PathBuf,

    /// Fraser file names allowed to have no coordinate columns
    pub coordinateless_files: Vec<String>,

    /// Show the per-file progress bar
    pub show_progress: bool,
}

impl Default for DepthsConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from(DEFAULT_RAW_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            coordinateless_files: FRASER_COORDINATELESS_FILES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            show_progress: true,
        }
    }
}

impl DepthsConfig {
    /// Read from a different raw directory
    pub fn with_raw_dir(mut self, raw_dir: impl Into<PathBuf>) -> Self {
        self.raw_dir = raw_dir.into();
        self
    }

    /// Write the combined table somewhere else
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Replace the coordinate-less allowlist
    pub fn with_coordinateless_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.coordinateless_files = names.into_iter().map(Into::into).collect();
        self
    }

    /// Disable the progress bar (tests, quiet mode)
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Whether `path` is a known file without coordinates
    pub fn is_known_coordinateless(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.coordinateless_files.iter().any(|known| known == name))
    }

    /// Check the configuration before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(DepthError::Configuration {
                message: "output path must not be empty".to_string(),
            });
        }
        if self.output_path.is_dir() {
            return Err(DepthError::Configuration {
                message: format!(
                    "output path {} is a directory",
                    self.output_path.display()
                ),
            });
        }
        Ok(())
    }
}
