//! Fraser transect parser
//!
//! The first row under the header holds units, not data. One survey file
//! was delivered without any coordinates; it is listed in the
//! configuration and yields an empty table. Any other file without an
//! Easting column is an error.

use super::{ParseContext, file_stem, log_dropped, projected_point, zone_from_cell};
use crate::config::DepthsConfig;
use crate::constants::{FRASER_ZONE_ROW, columns};
use crate::error::{DepthError, Result};
use crate::models::{DepthObservation, DepthTable, Location};
use crate::projection::UtmProjection;
use crate::sheet::Sheet;
use std::path::Path;
use tracing::{debug, warn};

/// Rows between the header and the first measurement
const UNITS_ROWS: usize = 1;

pub fn parse(path: &Path, ctx: &ParseContext<'_>) -> Result<DepthTable> {
    let sheet = ctx.workbooks.first_sheet(path)?;
    parse_sheet(&sheet, path, ctx.config)
}

pub fn parse_sheet(sheet: &Sheet, path: &Path, config: &DepthsConfig) -> Result<DepthTable> {
    let table = sheet.table(0);

    if !table.has_column(columns::EASTING) {
        if config.is_known_coordinateless(path) {
            warn!(
                "{}: known file without coordinates, contributing no rows",
                path.display()
            );
            return Ok(DepthTable::empty());
        }
        return Err(DepthError::UnexpectedCoordinatelessFile {
            path: path.to_path_buf(),
        });
    }

    let easting_col = table.require(columns::EASTING, path)?;
    let northing_col = table.require(columns::NORTHING, path)?;
    let zone_col = table.require(columns::UTM_ZONE, path)?;
    let depth_col = table.require(columns::DEPTH, path)?;
    let instrument_col = table.require(columns::MEASUREMENT_TOOL, path)?;
    let comments_col = table.require(columns::COMMENTS, path)?;
    let observer_col = table.require(columns::OBSERVER_NAME, path)?;

    let zone_row = table
        .row(UNITS_ROWS + FRASER_ZONE_ROW)
        .ok_or_else(|| DepthError::invalid_zone(path, ""))?;
    let zone = zone_from_cell(zone_row.cell(zone_col), path)?;
    let projection = UtmProjection::new(zone);
    debug!("{}: reprojecting from {}", path.display(), zone.crs());

    let site = file_stem(path)?
        .rsplit('_')
        .next()
        .map(str::to_string);
    let state = Location::Fraser.state();

    let observations: Vec<_> = table
        .rows()
        .skip(UNITS_ROWS)
        .filter_map(|row| {
            let depth = row.numeric(depth_col)?;
            let geometry = projected_point(
                &projection,
                row.numeric(easting_col),
                row.numeric(northing_col),
            )?;
            Some(DepthObservation {
                site: site.clone(),
                depth,
                observer: row.text(observer_col),
                instrument: row.text(instrument_col),
                comments: row.text(comments_col),
                geometry,
                state,
            })
        })
        .collect();

    log_dropped(
        path,
        table.rows().skip(UNITS_ROWS).count(),
        observations.len(),
    );
    Ok(DepthTable::geographic(observations))
}
