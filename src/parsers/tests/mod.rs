//! Test fixtures for the per-location parsers
//!
//! Each builder returns an in-memory sheet laid out like the raw export of
//! its site, so parsers can be exercised without workbook files.

use calamine::Data;

use crate::constants::CANONICAL_COLUMNS;
use crate::models::DepthTable;
use crate::processor::frame::table_to_frame;
use crate::sheet::Sheet;


pub fn s(value: &str) -> Data {
    Data::String(value.to_string())
}

pub fn f(value: f64) -> Data {
    Data::Float(value)
}

pub fn i(value: i64) -> Data {
    Data::Int(value)
}

pub fn e() -> Data {
    Data::Empty
}

/// Boise River workbook with projected coordinates in zone 11T
pub fn boise_projected_sheet() -> Sheet {
    Sheet::from_rows(vec![
        vec![
            s("Date"),
            s("Easting"),
            s("Northing"),
            s("UTM zone"),
            s("Depth (cm)"),
            s("Measurement Tool"),
            s("Comments"),
            s("Observer Name"),
            s("Extra"),
        ],
        vec![
            s("2021-01-27"),
            f(564_367.095),
            f(4_829_422.282),
            s("11T"),
            f(85.0),
            s("magnaprobe"),
            e(),
            s("J. Doe"),
            s("x"),
        ],
        vec![
            s("2021-01-27"),
            f(564_380.0),
            f(4_829_430.0),
            s("11T"),
            s("NR"),
            s("magnaprobe"),
            s("no reading"),
            s("J. Doe"),
            e(),
        ],
        vec![
            s("2021-01-27"),
            f(564_390.0),
            f(4_829_440.0),
            s("11T"),
            s("92"),
            s("probe"),
            s("tree well"),
            s("NR"),
            e(),
        ],
        vec![
            s("2021-01-27"),
            e(),
            f(4_829_450.0),
            s("11T"),
            f(70.0),
            s("probe"),
            e(),
            s("J. Doe"),
            e(),
        ],
    ])
}

/// Boise River dual-table workbook: 3 usable rows left, 2 usable rows right
pub fn boise_dual_table_sheet() -> Sheet {
    Sheet::from_rows(vec![
        vec![
            s("Point"),
            s("Depth"),
            s("Lon"),
            s("Lat"),
            s("Point"),
            s("Depth"),
            s("Lon"),
            s("Lat"),
        ],
        vec![
            i(1),
            f(101.0),
            f(-115.5),
            f(43.9),
            i(11),
            f(110.0),
            f(-115.51),
            f(43.91),
        ],
        vec![
            i(2),
            f(102.0),
            f(-115.6),
            f(43.8),
            i(12),
            s("NR"),
            f(-115.52),
            f(43.92),
        ],
        vec![
            i(3),
            f(103.0),
            s("bad"),
            f(43.7),
            i(13),
            f(113.0),
            f(-115.53),
            f(43.93),
        ],
        vec![
            i(4),
            f(104.0),
            f(-115.7),
            f(43.6),
            e(),
            e(),
            e(),
            e(),
        ],
        vec![s("Total"), f(410.0), e(), e(), s("Notes"), e(), e(), e()],
    ])
}

/// Senator Beck workbook: header block, then table at row 3
pub fn senator_beck_sheet() -> Sheet {
    Sheet::from_rows(vec![
        vec![e(), e(), e(), e(), s("Observer"), s("A. Skier")],
        vec![e(), e(), e(), e(), s("Zone"), s("13S")],
        vec![e(), e(), e(), e(), e(), e()],
        vec![
            s("WP"),
            s("Time"),
            s("UTM E"),
            s("UTM N"),
            s("Depth"),
            s("Notes"),
        ],
        vec![
            i(1),
            s("10:00"),
            f(262_603.919),
            f(4_198_157.359),
            f(120.0),
            s("wind crust"),
        ],
        vec![s("WP"), e(), s("UTM E"), s("UTM N"), s("Depth"), s("Notes")],
        vec![
            i(2),
            s("10:05"),
            f(262_610.0),
            e(),
            f(118.0),
            e(),
        ],
        vec![
            e(),
            s("10:10"),
            f(262_620.0),
            f(4_198_170.0),
            f(117.0),
            e(),
        ],
        vec![
            i(3),
            s("10:15"),
            f(262_630.0),
            f(4_198_180.0),
            s("rock"),
            e(),
        ],
        vec![
            i(4),
            s("10:20"),
            f(262_640.0),
            f(4_198_190.0),
            i(115),
            e(),
        ],
    ])
}

/// Cameron Pass workbook with the correct tool spelling
pub fn cameron_pass_sheet(tool_header: &str) -> Sheet {
    Sheet::from_rows(vec![
        vec![
            s("Longitude"),
            s("Latitude"),
            s("Depth (cm)"),
            s(tool_header),
            s("Description"),
        ],
        vec![f(-105.9), f(40.5), f(150.0), s("Magnaprobe"), s("open")],
        vec![f(-105.91), f(40.51), e(), s("Magnaprobe"), s("skipped")],
        vec![f(-105.92), f(40.52), f(147.5), s("Probe"), e()],
    ])
}

/// Fraser workbook: units row, zone 13 read from the third data row
pub fn fraser_sheet() -> Sheet {
    Sheet::from_rows(vec![
        vec![
            s("Point"),
            s("Easting"),
            s("Northing"),
            s("UTM zone"),
            s("Depth"),
            s("Measurement Tool"),
            s("Comments"),
            s("Observer Name"),
        ],
        vec![e(), s("m"), s("m"), e(), s("cm"), e(), e(), e()],
        vec![
            i(1),
            f(431_612.333),
            f(4_416_964.555),
            e(),
            f(60.0),
            s("probe"),
            e(),
            s("C. Hiker"),
        ],
        vec![
            i(2),
            f(431_620.0),
            f(4_416_970.0),
            e(),
            s("--"),
            s("probe"),
            e(),
            s("C. Hiker"),
        ],
        vec![
            i(3),
            f(431_630.0),
            f(4_416_980.0),
            i(13),
            f(62.0),
            s("probe"),
            s("near fence"),
            s("C. Hiker"),
        ],
    ])
}

/// Column names of a parsed table as a DataFrame
pub fn frame_columns(table: &DepthTable) -> Vec<String> {
    table_to_frame(table)
        .unwrap()
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

pub fn canonical_columns() -> Vec<String> {
    CANONICAL_COLUMNS.iter().map(|name| name.to_string()).collect()
}
