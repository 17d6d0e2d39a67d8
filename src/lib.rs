//! Snow Depths Library
//!
//! Normalizes the SnowEx 2021 time-series snow depth transects into a
//! single geographic table.
//!
//! This library provides tools for:
//! - Discovering transect files under `raw/<location>/<date>/Depth Transects/`
//! - Parsing each field site's own spreadsheet or CSV layout
//! - Reprojecting UTM easting/northing to WGS84 longitude/latitude
//! - Annotating rows with survey date and location, then writing one CSV

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parsers;
pub mod processor;
pub mod projection;
pub mod sheet;

// Re-export commonly used types
pub use config::DepthsConfig;
pub use error::{DepthError, Result};
pub use models::{DepthObservation, DepthTable, GeoPoint, Location, ProcessingStats, State};
pub use processor::DepthProcessor;
pub use sheet::{CalamineWorkbooks, InMemoryWorkbooks, Sheet, WorkbookSource};
