//! Senator Beck transect parser
//!
//! The sheet opens with a small header block rather than a table:
//!
//! ```text
//! row 0   ... | <observer name>
//! row 1   ... | <UTM zone, e.g. 13S>
//! row 3   WP  | ... | UTM E | UTM N | Depth | Notes
//! row 4+  data rows, index in column 0
//! ```

use super::{ParseContext, log_dropped, projected_point, zone_from_cell};
use crate::constants::columns;
use crate::constants::{
    SENATOR_BECK_HEADER_COLUMN, SENATOR_BECK_OBSERVER_ROW, SENATOR_BECK_TABLE_ROW,
    SENATOR_BECK_WAYPOINT_SENTINEL, SENATOR_BECK_ZONE_ROW,
};
use crate::error::Result;
use crate::models::{DepthObservation, DepthTable, Location};
use crate::projection::UtmProjection;
use crate::sheet::{Sheet, cells};
use std::path::Path;
use tracing::debug;

pub fn parse(path: &Path, ctx: &ParseContext<'_>) -> Result<DepthTable> {
    let sheet = ctx.workbooks.first_sheet(path)?;
    parse_sheet(&sheet, path)
}

pub fn parse_sheet(sheet: &Sheet, path: &Path) -> Result<DepthTable> {
    let observer =
        cells::to_text_or_na(sheet.cell(SENATOR_BECK_OBSERVER_ROW, SENATOR_BECK_HEADER_COLUMN));
    let zone = zone_from_cell(
        sheet.cell(SENATOR_BECK_ZONE_ROW, SENATOR_BECK_HEADER_COLUMN),
        path,
    )?;
    let projection = UtmProjection::new(zone);
    debug!(
        "{}: observer {:?}, reprojecting from {}",
        path.display(),
        observer,
        zone.crs()
    );

    let table = sheet.table(SENATOR_BECK_TABLE_ROW);
    let easting_col = table.require(columns::UTM_EASTING, path)?;
    let northing_col = table.require(columns::UTM_NORTHING, path)?;
    let depth_col = table.require(columns::DEPTH, path)?;
    let notes_col = table.require(columns::NOTES, path)?;
    let state = Location::SenatorBeck.state();

    let waypoints: Vec<_> = table
        .rows()
        .filter(|row| is_waypoint_row(row.cell(0)))
        .collect();

    let observations: Vec<_> = waypoints
        .iter()
        .filter_map(|row| {
            let depth = row.numeric(depth_col)?;
            let geometry = projected_point(
                &projection,
                row.numeric(easting_col),
                row.numeric(northing_col),
            )?;
            Some(DepthObservation {
                site: None,
                depth,
                observer: observer.clone(),
                instrument: None,
                comments: row.text(notes_col),
                geometry,
                state,
            })
        })
        .collect();

    log_dropped(path, waypoints.len(), observations.len());
    Ok(DepthTable::geographic(observations))
}

/// Data rows have a waypoint index; blank indices and repeated header rows do not count
fn is_waypoint_row(index: &calamine::Data) -> bool {
    !cells::is_blank(index)
        && cells::to_text(index).as_deref() != Some(SENATOR_BECK_WAYPOINT_SENTINEL)
}
