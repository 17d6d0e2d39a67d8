//! Per-location transect parsers
//!
//! Each field site exports its depth transects in its own layout. Every
//! parser maps one raw file to a [`DepthTable`] with the same canonical
//! columns and geographic (EPSG:4326) points, so the tables can be stacked
//! without reconciliation.
//!
//! ## Architecture
//!
//! - [`boise_river`] - workbook (projected or dual-table) and delimited-text exports
//! - [`senator_beck`] - workbook with a header block above the data table
//! - [`cameron_pass`] - workbook with longitude/latitude columns
//! - [`fraser`] - workbook with a units row, one known coordinate-less file
//!
//! Dispatch goes through [`Location::parse_file`], a closed match over the
//! registered locations.

pub mod boise_river;
pub mod cameron_pass;
pub mod fraser;
pub mod senator_beck;

#[cfg(test)]
pub mod tests;

use crate::config::DepthsConfig;
use crate::error::{DepthError, Result};
use crate::models::{DepthTable, GeoPoint, Location};
use crate::projection::{UtmProjection, UtmZone};
use crate::sheet::{WorkbookSource, cells};
use calamine::Data;
use std::path::Path;
use tracing::debug;

/// Everything a parser may need besides the file itself
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    pub workbooks: &'a dyn WorkbookSource,
    pub config: &'a DepthsConfig,
}

impl<'a> ParseContext<'a> {
    pub fn new(workbooks: &'a dyn WorkbookSource, config: &'a DepthsConfig) -> Self {
        Self { workbooks, config }
    }
}

impl Location {
    /// Parse one transect file with the parser registered for this location
    pub fn parse_file(&self, path: &Path, ctx: &ParseContext<'_>) -> Result<DepthTable> {
        match self {
            Location::BoiseRiver => boise_river::parse(path, ctx),
            Location::SenatorBeck => senator_beck::parse(path, ctx),
            Location::Fraser => fraser::parse(path, ctx),
            Location::CameronPass => cameron_pass::parse(path, ctx),
        }
    }
}

/// File name as text
pub(crate) fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| DepthError::SiteNotDerivable {
            path: path.to_path_buf(),
            reason: "file name is not valid UTF-8".to_string(),
        })
}

/// File name without its extension
pub(crate) fn file_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| DepthError::SiteNotDerivable {
            path: path.to_path_buf(),
            reason: "file stem is not valid UTF-8".to_string(),
        })
}

/// UTM zone from a text cell ("11T") or a numeric cell (13)
pub(crate) fn zone_from_cell(cell: &Data, path: &Path) -> Result<UtmZone> {
    let zone = match cell {
        Data::String(text) => UtmZone::parse(text),
        Data::Float(value) => UtmZone::from_number(*value),
        Data::Int(value) => u8::try_from(*value).ok().and_then(UtmZone::new),
        _ => None,
    };

    zone.ok_or_else(|| DepthError::invalid_zone(path, cells::to_text(cell).unwrap_or_default()))
}

/// Geographic point from numeric easting/northing, `None` if either is missing
pub(crate) fn projected_point(
    projection: &UtmProjection,
    easting: Option<f64>,
    northing: Option<f64>,
) -> Option<GeoPoint> {
    Some(projection.unproject(easting?, northing?))
}

/// Geographic point from numeric longitude/latitude, `None` if either is missing
pub(crate) fn geographic_point(lon: Option<f64>, lat: Option<f64>) -> Option<GeoPoint> {
    Some(GeoPoint::new(lon?, lat?))
}

/// Report rows discarded for a non-numeric depth or coordinate
pub(crate) fn log_dropped(path: &Path, candidates: usize, kept: usize) {
    if kept < candidates {
        debug!(
            "{}: dropped {} of {} rows",
            path.display(),
            candidates - kept,
            candidates
        );
    }
}
