//! Cameron Pass transect parser
//!
//! Exports already carry WGS84 longitude/latitude, so points are taken
//! as-is. Column spellings drifted between survey dates; each field is
//! accepted under either of its known headers.

use super::{ParseContext, file_stem, geographic_point, log_dropped};
use crate::constants::columns;
use crate::error::{DepthError, Result};
use crate::models::{DepthObservation, DepthTable, Location};
use crate::sheet::Sheet;
use std::path::Path;

const DEPTH_COLUMNS: &[&str] = &[columns::DEPTH, columns::DEPTH_CM];
const INSTRUMENT_COLUMNS: &[&str] = &[columns::MEASUREMENT_TOOL, columns::MEASUREMENT_TOOL_TYPO];
const COMMENT_COLUMNS: &[&str] = &[columns::LOCATION, columns::DESCRIPTION];

pub fn parse(path: &Path, ctx: &ParseContext<'_>) -> Result<DepthTable> {
    let sheet = ctx.workbooks.first_sheet(path)?;
    parse_sheet(&sheet, path)
}

pub fn parse_sheet(sheet: &Sheet, path: &Path) -> Result<DepthTable> {
    let table = sheet.table(0);
    let lon_col = table.require(columns::LONGITUDE, path)?;
    let lat_col = table.require(columns::LATITUDE, path)?;
    let depth_col = table.require_any(DEPTH_COLUMNS, path)?;
    let instrument_col = table.require_any(INSTRUMENT_COLUMNS, path)?;
    let comments_col = table.require_any(COMMENT_COLUMNS, path)?;

    let site = site_from_stem(path)?;
    let state = Location::CameronPass.state();

    let observations: Vec<_> = table
        .rows()
        .filter_map(|row| {
            let depth = row.numeric(depth_col)?;
            let geometry = geographic_point(row.numeric(lon_col), row.numeric(lat_col))?;
            Some(DepthObservation {
                site: Some(site.clone()),
                depth,
                observer: None,
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

/// Site is the second `_` token of the file stem
fn site_from_stem(path: &Path) -> Result<String> {
    file_stem(path)?
        .split('_')
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| DepthError::SiteNotDerivable {
            path: path.to_path_buf(),
            reason: "file stem has no second '_' token".to_string(),
        })
}
