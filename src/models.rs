//! Core data structures for snow depth normalization.
//!
//! Defines the survey locations, the normalized observation record and
//! the per-file table every parser returns, plus processing statistics.

use crate::constants::{BOISE_RIVER, CAMERON_PASS, FRASER, SENATOR_BECK};
use crate::error::{DepthError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Field sites covered by the time-series transects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    BoiseRiver,
    SenatorBeck,
    Fraser,
    CameronPass,
}

impl Location {
    /// Every registered location, in registration order
    pub const ALL: [Location; 4] = [
        Location::BoiseRiver,
        Location::SenatorBeck,
        Location::Fraser,
        Location::CameronPass,
    ];

    /// Look up the location registered for a directory name
    pub fn from_dir_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|location| location.name() == name)
            .ok_or_else(|| DepthError::UnregisteredLocation {
                name: name.to_string(),
            })
    }

    /// Human-readable name, identical to the raw directory name
    pub fn name(&self) -> &'static str {
        match self {
            Location::BoiseRiver => BOISE_RIVER,
            Location::SenatorBeck => SENATOR_BECK,
            Location::Fraser => FRASER,
            Location::CameronPass => CAMERON_PASS,
        }
    }

    /// Region the location lies in
    pub fn state(&self) -> State {
        match self {
            Location::BoiseRiver => State::Idaho,
            Location::SenatorBeck | Location::Fraser | Location::CameronPass => State::Colorado,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Two-letter region code written to the `state` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    Idaho,
    Colorado,
}

impl State {
    pub fn code(&self) -> &'static str {
        match self {
            State::Idaho => "ID",
            State::Colorado => "CO",
        }
    }
}

/// Coordinate reference of a point collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crs {
    /// Geographic WGS84 longitude/latitude
    Wgs84,
    /// WGS84 / UTM northern hemisphere zone
    UtmNorth(u8),
}

impl Crs {
    pub fn epsg(&self) -> u32 {
        match self {
            Crs::Wgs84 => 4326,
            Crs::UtmNorth(zone) => 32600 + u32::from(*zone),
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

/// Geographic point, degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Well-known-text form used in the output table
    pub fn to_wkt(&self) -> String {
        format!("POINT ({} {})", self.lon, self.lat)
    }
}

/// One normalized depth measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthObservation {
    pub site: Option<String>,
    /// Snow depth in centimeters
    pub depth: f64,
    pub observer: Option<String>,
    pub instrument: Option<String>,
    pub comments: Option<String>,
    pub geometry: GeoPoint,
    pub state: State,
}

/// Normalized table produced by parsing one transect file
#[derive(Debug, Clone, PartialEq)]
pub struct DepthTable {
    crs: Crs,
    observations: Vec<DepthObservation>,
}

impl DepthTable {
    /// Table of points already in geographic coordinates
    pub fn geographic(observations: Vec<DepthObservation>) -> Self {
        Self {
            crs: Crs::Wgs84,
            observations,
        }
    }

    /// Empty table with the canonical schema
    pub fn empty() -> Self {
        Self::geographic(Vec::new())
    }

    pub fn crs(&self) -> Crs {
        self.crs
    }

    pub fn observations(&self) -> &[DepthObservation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// A transect file discovered under the raw tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyFile {
    pub location: Location,
    pub date: NaiveDate,
    pub path: PathBuf,
}

/// Processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub rows_written: usize,
    pub rows_per_location: BTreeMap<Location, usize>,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}
