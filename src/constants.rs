//! Application constants for the snow depth normalizer
//!
//! Fixed paths, directory names, column labels and per-site sentinels.
//! Each site's export format is hard-coded, so the labels below are the
//! exact header strings found in the raw files.

// =============================================================================
// Paths and Directory Layout
// =============================================================================

/// Root of the raw SnowEx 2021 time-series depth transect tree
pub const DEFAULT_RAW_DIR: &str = "SnowEx2021_TimeSeries_DepthTransects/raw";

/// Combined output table
pub const DEFAULT_OUTPUT_FILE: &str = "depths.csv";

/// Folder inside each date directory holding the transect files
pub const DEPTH_TRANSECTS_DIR: &str = "Depth Transects";

/// Calendar formats accepted for date directory names, tried in order
pub const SURVEY_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y%m%d", "%m-%d-%Y", "%m/%d/%Y", "%m_%d_%Y", "%Y_%m_%d", "%m.%d.%Y", "%m-%d-%y",
    "%m%d%Y", "%d %B %Y", "%B %d %Y", "%b %d %Y",
];

// =============================================================================
// Output Schema
// =============================================================================

pub const SITE_COLUMN: &str = "site";
pub const DEPTH_COLUMN: &str = "depth";
pub const OBSERVER_COLUMN: &str = "observer";
pub const INSTRUMENT_COLUMN: &str = "instrument";
pub const COMMENTS_COLUMN: &str = "comments";
pub const GEOMETRY_COLUMN: &str = "geometry";
pub const STATE_COLUMN: &str = "state";

/// Column order every parser produces
pub const CANONICAL_COLUMNS: &[&str] = &[
    SITE_COLUMN,
    DEPTH_COLUMN,
    OBSERVER_COLUMN,
    INSTRUMENT_COLUMN,
    COMMENTS_COLUMN,
    GEOMETRY_COLUMN,
    STATE_COLUMN,
];

/// Columns the driver appends to each parsed table
pub const DATE_COLUMN: &str = "date";
pub const LOCATION_COLUMN: &str = "Location";

/// Output CSV leads with an unnamed integer row index
pub const ROW_INDEX_COLUMN: &str = "";

// =============================================================================
// Location Names
// =============================================================================

pub const BOISE_RIVER: &str = "Boise River";
pub const SENATOR_BECK: &str = "Senator Beck";
pub const FRASER: &str = "Fraser";
pub const CAMERON_PASS: &str = "Cameron Pass";

// =============================================================================
// Per-site Column Labels
// =============================================================================

pub mod columns {
    pub const EASTING: &str = "Easting";
    pub const NORTHING: &str = "Northing";
    pub const UTM_ZONE: &str = "UTM zone";
    pub const DEPTH: &str = "Depth";
    pub const DEPTH_CM: &str = "Depth (cm)";
    pub const MEASUREMENT_TOOL: &str = "Measurement Tool";
    /// Misspelling present in some Cameron Pass exports
    pub const MEASUREMENT_TOOL_TYPO: &str = "Measurment Tool";
    pub const COMMENTS: &str = "Comments";
    pub const OBSERVER_NAME: &str = "Observer Name";
    pub const LONGITUDE: &str = "Longitude";
    pub const LATITUDE: &str = "Latitude";
    pub const LOCATION: &str = "Location";
    pub const DESCRIPTION: &str = "Description";
    pub const NOTES: &str = "Notes";
    pub const UTM_EASTING: &str = "UTM E";
    pub const UTM_NORTHING: &str = "UTM N";

    /// Boise River delimited-text exports use squashed names
    pub mod delimited {
        pub const DEPTH: &str = "Depth";
        pub const MEASUREMENT_TOOL: &str = "MeasurementTool";
        pub const COMMENTS: &str = "Comments";
        pub const OBSERVER_NAME: &str = "ObserverName";
        pub const LONGITUDE: &str = "Longitude";
        pub const LATITUDE: &str = "Latitude";
    }
}

// =============================================================================
// Missing Values
// =============================================================================

/// Text cells read as missing in every table, whatever the site
///
/// The empty string is handled separately by the cell coercions.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// =============================================================================
// Site-specific Sentinels
// =============================================================================

/// Boise River workbooks mark unrecorded cells with this literal
pub const BOISE_NA_VALUE: &str = "NR";

/// Every dual-table Boise River sheet was recorded by this observer
pub const BOISE_DUAL_TABLE_OBSERVER: &str = "B. Minich";

/// Dual-table layout: the second table's depth column
pub const BOISE_SECOND_TABLE_COLUMN: usize = 5;

/// Delimited Boise River files carry the site code in their first characters
pub const BOISE_DELIMITED_SITE_LEN: usize = 6;

/// Senator Beck header block: observer name in row 0, UTM zone in row 1
pub const SENATOR_BECK_HEADER_COLUMN: usize = 5;
pub const SENATOR_BECK_OBSERVER_ROW: usize = 0;
pub const SENATOR_BECK_ZONE_ROW: usize = 1;

/// Senator Beck data table header row (rows above are the header block)
pub const SENATOR_BECK_TABLE_ROW: usize = 3;

/// Index value of the repeated waypoint header row in Senator Beck tables
pub const SENATOR_BECK_WAYPOINT_SENTINEL: &str = "WP";

/// Fraser: data row (after the units row) carrying the UTM zone
pub const FRASER_ZONE_ROW: usize = 2;

/// Fraser files known to lack coordinates entirely
pub const FRASER_COORDINATELESS_FILES: &[&str] = &["20210203 Radar 2.xlsx"];
