//! Integration tests for the processor module
//!
//! Drives the complete pipeline over temporary raw trees. Workbook files
//! exist on disk as placeholders; their contents are served from memory.


use crate::config::DepthsConfig;
use crate::parsers::tests::{
    boise_projected_sheet, cameron_pass_sheet, fraser_sheet, senator_beck_sheet,
};
use crate::sheet::InMemoryWorkbooks;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BOISE_CSV: &str = "\
Date,Time,Depth,MeasurementTool,Comments,ObserverName,Longitude,Latitude
2021-02-10,10:00,110,magnaprobe,,K. Elder,-115.31,44.21
2021-02-10,10:01,n/a,magnaprobe,skipped,K. Elder,-115.32,44.22
2021-02-10,10:02,98,probe,shallow,K. Elder,-115.34,44.24
2021-02-10,10:03,101,probe,,K. Elder,-115.35,44.25
";

/// Create `raw/<location>/<date>/Depth Transects/` and return it
pub fn transects_dir(raw: &Path, location: &str, date: &str) -> PathBuf {
    let dir = raw.join(location).join(date).join("Depth Transects");
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Place an empty workbook on disk and register its sheet in memory
pub fn add_workbook(
    workbooks: &mut InMemoryWorkbooks,
    dir: &Path,
    name: &str,
    sheet: crate::sheet::Sheet,
) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "").unwrap();
    workbooks.insert(path.clone(), sheet);
    path
}

/// Raw tree with one file per location plus the known coordinate-less file
///
/// Expected rows: Boise River 2 (xlsx) + 3 (csv), Senator Beck 2,
/// Fraser 2 + 0, Cameron Pass 2; eleven in total from six files.
pub fn create_raw_tree(temp_dir: &TempDir) -> (PathBuf, InMemoryWorkbooks) {
    let raw = temp_dir.path().join("raw");
    let mut workbooks = InMemoryWorkbooks::new();

    let boise = transects_dir(&raw, "Boise River", "20210127");
    add_workbook(
        &mut workbooks,
        &boise,
        "BogusUpper_20210127.xlsx",
        boise_projected_sheet(),
    );
    let boise_csv = transects_dir(&raw, "Boise River", "20210210");
    fs::write(boise_csv.join("IDBRLD_20210210.csv"), BOISE_CSV).unwrap();

    let beck = transects_dir(&raw, "Senator Beck", "2021-02-03");
    add_workbook(&mut workbooks, &beck, "SBB_20210203.xlsx", senator_beck_sheet());

    let fraser = transects_dir(&raw, "Fraser", "20210203");
    add_workbook(
        &mut workbooks,
        &fraser,
        "20210203 Radar 2.xlsx",
        crate::sheet::Sheet::from_rows(vec![vec![
            crate::parsers::tests::s("Point"),
            crate::parsers::tests::s("Depth"),
        ]]),
    );
    add_workbook(
        &mut workbooks,
        &fraser,
        "FRSR_20210203_Alpine.xlsx",
        fraser_sheet(),
    );

    let cameron = transects_dir(&raw, "Cameron Pass", "01-20-2021");
    add_workbook(
        &mut workbooks,
        &cameron,
        "CPTS_JoeWright_20210120.xlsx",
        cameron_pass_sheet("Measurment Tool"),
    );

    (raw, workbooks)
}

pub fn test_config(raw: &Path, output: &Path) -> DepthsConfig {
    DepthsConfig::default()
        .with_raw_dir(raw)
        .with_output_path(output)
        .without_progress()
}
