//! DataFrame conversion for parsed transect tables
//!
//! Each parsed [`DepthTable`] becomes a polars frame with the canonical
//! columns, then gets the survey date and location attached as literal
//! columns before it is stacked onto the combined output.

use crate::constants::{
    COMMENTS_COLUMN, DATE_COLUMN, DEPTH_COLUMN, GEOMETRY_COLUMN, INSTRUMENT_COLUMN,
    LOCATION_COLUMN, OBSERVER_COLUMN, SITE_COLUMN, STATE_COLUMN,
};
use crate::error::Result;
use crate::models::{DepthObservation, DepthTable, Location};
use chrono::NaiveDate;
use polars::prelude::*;

/// Convert one parsed table to a frame in canonical column order
pub fn table_to_frame(table: &DepthTable) -> Result<DataFrame> {
    let observations = table.observations();

    let text = |name: &str, field: fn(&DepthObservation) -> Option<&str>| {
        let values: Vec<Option<&str>> = observations.iter().map(field).collect();
        Column::new(name.into(), values)
    };

    let depth: Vec<f64> = observations.iter().map(|o| o.depth).collect();
    let geometry: Vec<String> = observations.iter().map(|o| o.geometry.to_wkt()).collect();
    let state: Vec<&str> = observations.iter().map(|o| o.state.code()).collect();

    let frame = DataFrame::new(vec![
        text(SITE_COLUMN, |o| o.site.as_deref()),
        Column::new(DEPTH_COLUMN.into(), depth),
        text(OBSERVER_COLUMN, |o| o.observer.as_deref()),
        text(INSTRUMENT_COLUMN, |o| o.instrument.as_deref()),
        text(COMMENTS_COLUMN, |o| o.comments.as_deref()),
        Column::new(GEOMETRY_COLUMN.into(), geometry),
        Column::new(STATE_COLUMN.into(), state),
    ])?;

    Ok(frame)
}

/// Attach the survey date (ISO 8601) and location name to every row
pub fn annotate(frame: DataFrame, date: NaiveDate, location: Location) -> Result<DataFrame> {
    let annotated = frame
        .lazy()
        .with_columns([
            lit(date.format("%Y-%m-%d").to_string()).alias(DATE_COLUMN),
            lit(location.name()).alias(LOCATION_COLUMN),
        ])
        .collect()?;

    Ok(annotated)
}

/// Zero-row frame with the full output schema, the start of the fold
pub fn empty_output_frame() -> Result<DataFrame> {
    let mut frame = table_to_frame(&DepthTable::empty())?;
    frame.with_column(Column::new(DATE_COLUMN.into(), Vec::<String>::new()))?;
    frame.with_column(Column::new(LOCATION_COLUMN.into(), Vec::<String>::new()))?;
    Ok(frame)
}
