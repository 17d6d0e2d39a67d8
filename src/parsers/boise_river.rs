//! Boise River transect parser
//!
//! Three export layouts exist for this site:
//!
//! ```text
//! *.xlsx with Easting   | index | ... | Easting | Northing | UTM zone | Depth (cm) | ...
//! *.xlsx without        | n | depth | lon | lat | n | depth | lon | lat |   (two side-by-side tables)
//! *.csv                 | Date | Time | ... | Longitude | Latitude | Depth | ...
//! ```

use super::{
    ParseContext, file_name, geographic_point, log_dropped, projected_point, zone_from_cell,
};
use crate::constants::columns::{self, delimited};
use crate::constants::{
    BOISE_DELIMITED_SITE_LEN, BOISE_DUAL_TABLE_OBSERVER, BOISE_NA_VALUE,
    BOISE_SECOND_TABLE_COLUMN,
};
use crate::error::{DepthError, Result};
use crate::models::{DepthObservation, DepthTable, Location};
use crate::projection::UtmProjection;
use crate::sheet::{Sheet, Table, read_delimited};
use std::path::Path;
use tracing::debug;

const NA_VALUES: &[&str] = &[BOISE_NA_VALUE];

/// Parse a Boise River transect file, branching on its extension
pub fn parse(path: &Path, ctx: &ParseContext<'_>) -> Result<DepthTable> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("xlsx") => {
            let sheet = ctx.workbooks.first_sheet(path)?;
            parse_workbook(&sheet, path)
        }
        Some("csv") => {
            let sheet = read_delimited(path)?;
            parse_delimited(&sheet, path)
        }
        _ => Err(DepthError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Workbook exports: projected coordinates if an Easting column exists,
/// otherwise the irregular dual-table layout
pub fn parse_workbook(sheet: &Sheet, path: &Path) -> Result<DepthTable> {
    let table = sheet.table_with_na(0, NA_VALUES);

    if table.has_column(columns::EASTING) {
        debug!("{}: projected layout", path.display());
        parse_projected(&table, path)
    } else {
        debug!("{}: dual-table layout", path.display());
        parse_dual_table(&table, path)
    }
}

fn parse_projected(table: &Table<'_>, path: &Path) -> Result<DepthTable> {
    let easting_col = table.require(columns::EASTING, path)?;
    let northing_col = table.require(columns::NORTHING, path)?;
    let zone_col = table.require(columns::UTM_ZONE, path)?;
    let depth_col = table.require(columns::DEPTH_CM, path)?;
    let instrument_col = table.require(columns::MEASUREMENT_TOOL, path)?;
    let comments_col = table.require(columns::COMMENTS, path)?;
    let observer_col = table.require(columns::OBSERVER_NAME, path)?;

    // One zone per file, taken from the first row
    let first_row = table
        .row(0)
        .ok_or_else(|| DepthError::invalid_zone(path, ""))?;
    let zone = zone_from_cell(first_row.cell(zone_col), path)?;
    let projection = UtmProjection::new(zone);
    debug!("{}: reprojecting from {}", path.display(), zone.crs());

    let site = file_name(path)?.split('_').next().map(str::to_string);
    let state = Location::BoiseRiver.state();

    let observations: Vec<_> = table
        .rows()
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

    log_dropped(path, table.rows().count(), observations.len());
    Ok(DepthTable::geographic(observations))
}

fn parse_dual_table(table: &Table<'_>, path: &Path) -> Result<DepthTable> {
    let site = dual_table_site(path)?;
    let state = Location::BoiseRiver.state();

    // Numbered rows of the first table: index in column 0, then depth/lon/lat
    let first = table
        .rows()
        .filter(|row| row.numeric(0).is_some())
        .map(|row| (row.numeric(1), row.numeric(2), row.numeric(3)));

    // Second table: rows with a numeric depth in its first column
    let second_col = BOISE_SECOND_TABLE_COLUMN;
    let second = table
        .rows()
        .filter(|row| row.numeric(second_col).is_some())
        .map(|row| {
            (
                row.numeric(second_col),
                row.numeric(second_col + 1),
                row.numeric(second_col + 2),
            )
        });

    let candidates: Vec<_> = first.chain(second).collect();
    let candidate_count = candidates.len();

    let observations: Vec<_> = candidates
        .into_iter()
        .filter_map(|(depth, lon, lat)| {
            let geometry = geographic_point(lon, lat)?;
            Some(DepthObservation {
                site: Some(site.clone()),
                depth: depth?,
                observer: Some(BOISE_DUAL_TABLE_OBSERVER.to_string()),
                instrument: None,
                comments: None,
                geometry,
                state,
            })
        })
        .collect();

    debug!(
        "{}: {} observations from dual-table layout",
        path.display(),
        observations.len()
    );
    log_dropped(path, candidate_count, observations.len());
    Ok(DepthTable::geographic(observations))
}

/// Dual-table files carry the site as the first `_` token containing "ID"
fn dual_table_site(path: &Path) -> Result<String> {
    file_name(path)?
        .split('_')
        .find(|token| token.contains("ID"))
        .map(str::to_string)
        .ok_or_else(|| DepthError::SiteNotDerivable {
            path: path.to_path_buf(),
            reason: "no file name token contains 'ID'".to_string(),
        })
}

/// Delimited-text exports with explicit longitude/latitude columns
pub fn parse_delimited(sheet: &Sheet, path: &Path) -> Result<DepthTable> {
    let table = sheet.table(0);
    let depth_col = table.require(delimited::DEPTH, path)?;
    let instrument_col = table.require(delimited::MEASUREMENT_TOOL, path)?;
    let comments_col = table.require(delimited::COMMENTS, path)?;
    let observer_col = table.require(delimited::OBSERVER_NAME, path)?;
    let lon_col = table.require(delimited::LONGITUDE, path)?;
    let lat_col = table.require(delimited::LATITUDE, path)?;

    let site: String = file_name(path)?
        .chars()
        .take(BOISE_DELIMITED_SITE_LEN)
        .collect();
    let state = Location::BoiseRiver.state();

    let observations: Vec<_> = table
        .rows()
        .filter_map(|row| {
            let depth = row.numeric(depth_col)?;
            let geometry = geographic_point(row.numeric(lon_col), row.numeric(lat_col))?;
            Some(DepthObservation {
                site: Some(site.clone()),
                depth,
                observer: row.text(observer_col),
                instrument: row.text(instrument_col),
                comments: row.text(comments_col),
                geometry,
                state,
            })
        })
        .collect();

    log_dropped(path, table.rows().count(), observations.len());
    Ok(DepthTable::geographic(observations))
}
