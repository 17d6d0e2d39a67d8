//! Survey file discovery
//!
//! Walks the raw tree and resolves every transect file to its location
//! and survey date before anything is parsed, so a misnamed directory
//! fails the run up front.

use crate::constants::{DEPTH_TRANSECTS_DIR, SURVEY_DATE_FORMATS};
use crate::error::{DepthError, Result};
use crate::models::{Location, SurveyFile};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// File discovery component for the raw transect tree
#[derive(Debug)]
pub struct SurveyDiscovery {
    raw_dir: PathBuf,
}

impl SurveyDiscovery {
    pub fn new(raw_dir: PathBuf) -> Self {
        Self { raw_dir }
    }

    /// Discover all transect files
    ///
    /// The raw tree follows this structure:
    /// ```text
    /// raw/
    ///   Boise River/
    ///     20210127/
    ///       Depth Transects/
    ///         BogusUpper_20210127.xlsx
    ///   Fraser/
    ///     20210203/
    ///       Depth Transects/
    ///         20210203 Radar 2.xlsx
    /// ```
    ///
    /// Every level is visited in name order; hidden entries are skipped.
    pub async fn discover(&self) -> Result<Vec<SurveyFile>> {
        if !fs::try_exists(&self.raw_dir).await? {
            return Err(DepthError::LayoutNotFound {
                path: self.raw_dir.clone(),
            });
        }

        debug!("Searching for transect files in: {}", self.raw_dir.display());

        let mut files = Vec::new();
        for (name, location_path) in sorted_entries(&self.raw_dir, EntryKind::Directory).await? {
            let location = Location::from_dir_name(&name)?;
            let location_files = self.discover_location(location, &location_path).await?;
            info!("{}: {} transect files", location, location_files.len());
            files.extend(location_files);
        }

        debug!("Found {} transect files", files.len());
        Ok(files)
    }

    /// Discover files in every date directory of one location
    async fn discover_location(
        &self,
        location: Location,
        location_path: &Path,
    ) -> Result<Vec<SurveyFile>> {
        let mut files = Vec::new();

        for (name, date_path) in sorted_entries(location_path, EntryKind::Directory).await? {
            let date = parse_survey_date(&name)?;
            let transects_path = date_path.join(DEPTH_TRANSECTS_DIR);

            if !fs::try_exists(&transects_path).await? {
                return Err(DepthError::LayoutNotFound {
                    path: transects_path,
                });
            }

            for (_, path) in sorted_entries(&transects_path, EntryKind::File).await? {
                debug!("{} {}: {}", location, date, path.display());
                files.push(SurveyFile {
                    location,
                    date,
                    path,
                });
            }
        }

        Ok(files)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
}

/// Visible entries of one kind, sorted by name
async fn sorted_entries(dir: &Path, kind: EntryKind) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let file_type = entry.file_type().await?;
        let wanted = match kind {
            EntryKind::Directory => file_type.is_dir(),
            EntryKind::File => file_type.is_file(),
        };
        if wanted {
            entries.push((name, entry.path()));
        }
    }

    entries.sort();
    Ok(entries)
}

/// Parse a date directory name with the accepted calendar formats
pub fn parse_survey_date(name: &str) -> Result<NaiveDate> {
    let trimmed = name.trim();
    SURVEY_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DepthError::InvalidSurveyDate {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Helper to create a raw tree with two locations
    fn create_raw_tree(temp_dir: &TempDir) -> PathBuf {
        let raw = temp_dir.path().join("raw");

        let boise = raw.join("Boise River").join("20210127").join("Depth Transects");
        fs::create_dir_all(&boise).unwrap();
        fs::write(boise.join("b_site.xlsx"), "").unwrap();
        fs::write(boise.join("a_site.csv"), "").unwrap();
        fs::write(boise.join(".~lock.a_site.csv#"), "").unwrap();
        fs::create_dir_all(boise.join("archive")).unwrap();

        let fraser_late = raw.join("Fraser").join("2021-02-10").join("Depth Transects");
        let fraser_early = raw.join("Fraser").join("20210203").join("Depth Transects");
        fs::create_dir_all(&fraser_late).unwrap();
        fs::create_dir_all(&fraser_early).unwrap();
        fs::write(fraser_late.join("late.xlsx"), "").unwrap();
        fs::write(fraser_early.join("20210203 Radar 2.xlsx"), "").unwrap();

        fs::create_dir_all(raw.join(".cache")).unwrap();
        fs::write(raw.join("README.txt"), "").unwrap();

        raw
    }

    #[tokio::test]
    async fn test_discover_walks_layout_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        let raw = create_raw_tree(&temp_dir);

        let files = SurveyDiscovery::new(raw).discover().await.unwrap();
        let summary: Vec<_> = files
            .iter()
            .map(|file| {
                (
                    file.location,
                    file.date.to_string(),
                    file.path.file_name().unwrap().to_string_lossy().into_owned(),
                )
            })
            .collect();

        assert_eq!(
            summary,
            vec![
                (Location::BoiseRiver, "2021-01-27".to_string(), "a_site.csv".to_string()),
                (Location::BoiseRiver, "2021-01-27".to_string(), "b_site.xlsx".to_string()),
                (Location::Fraser, "2021-02-10".to_string(), "late.xlsx".to_string()),
                (
                    Location::Fraser,
                    "2021-02-03".to_string(),
                    "20210203 Radar 2.xlsx".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_raw_dir() {
        let temp_dir = TempDir::new().unwrap();
        let raw = temp_dir.path().join("nonexistent");

        match SurveyDiscovery::new(raw.clone()).discover().await {
            Err(DepthError::LayoutNotFound { path }) => assert_eq!(path, raw),
            other => panic!("Expected LayoutNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unregistered_location_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let raw = temp_dir.path().join("raw");
        fs::create_dir_all(raw.join("Grand Mesa").join("20210127").join("Depth Transects"))
            .unwrap();

        match SurveyDiscovery::new(raw).discover().await {
            Err(DepthError::UnregisteredLocation { name }) => assert_eq!(name, "Grand Mesa"),
            other => panic!("Expected UnregisteredLocation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_transects_folder() {
        let temp_dir = TempDir::new().unwrap();
        let raw = temp_dir.path().join("raw");
        let date_dir = raw.join("Senator Beck").join("20210127");
        fs::create_dir_all(&date_dir).unwrap();

        match SurveyDiscovery::new(raw).discover().await {
            Err(DepthError::LayoutNotFound { path }) => {
                assert_eq!(path, date_dir.join("Depth Transects"))
            }
            other => panic!("Expected LayoutNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_survey_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 2, 3).unwrap();
        for name in ["20210203", "2021-02-03", "02-03-2021", "02_03_2021", "3 February 2021"] {
            assert_eq!(parse_survey_date(name).unwrap(), expected, "{}", name);
        }
    }

    #[test]
    fn test_parse_survey_date_rejects_text() {
        match parse_survey_date("pit notes") {
            Err(DepthError::InvalidSurveyDate { name }) => assert_eq!(name, "pit notes"),
            other => panic!("Expected InvalidSurveyDate, got {:?}", other),
        }
        assert!(parse_survey_date("20211345").is_err());
    }
}
