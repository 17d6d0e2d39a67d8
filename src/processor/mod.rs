//! Main processing engine.
//!
//! Orchestrates the normalization run using specialized modules for
//! file discovery, DataFrame conversion and CSV writing. Files are parsed
//! one at a time; the output is written only after every file parsed.

pub mod discovery;
pub mod frame;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{discovery::SurveyDiscovery, frame::empty_output_frame, writer::DepthsWriter};

use crate::config::DepthsConfig;
use crate::error::{DepthError, Result};
use crate::models::{Location, ProcessingStats, SurveyFile};
use crate::parsers::ParseContext;
use crate::sheet::{CalamineWorkbooks, WorkbookSource};

use colored::*;
use futures::stream::{self, TryStreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::DataFrame;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use tracing::{debug, info, warn};

/// One parsed and annotated transect file
struct ParsedFile {
    location: Location,
    rows: usize,
    frame: DataFrame,
}

/// Main processor for the depth transect tree
pub struct DepthProcessor {
    config: Arc<DepthsConfig>,
    workbooks: Arc<dyn WorkbookSource>,
    discovery: SurveyDiscovery,
    writer: DepthsWriter,
}

impl DepthProcessor {
    /// Create a processor reading workbooks from disk
    pub fn new(config: DepthsConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            discovery: SurveyDiscovery::new(config.raw_dir.clone()),
            writer: DepthsWriter::new(config.output_path.clone()),
            config: Arc::new(config),
            workbooks: Arc::new(CalamineWorkbooks),
        })
    }

    /// Swap the workbook source
    pub fn with_workbooks(mut self, workbooks: Arc<dyn WorkbookSource>) -> Self {
        self.workbooks = workbooks;
        self
    }

    pub fn config(&self) -> &DepthsConfig {
        &self.config
    }

    /// Main processing entry point
    pub async fn process(&self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        let interactive = self.config.show_progress;

        if interactive {
            println!("{}", "Starting snow depth normalization".bright_green().bold());
            println!(
                "  {} {}",
                "Raw data:".bright_cyan(),
                self.config.raw_dir.display()
            );
            println!(
                "  {} {}",
                "Output:".bright_cyan(),
                self.config.output_path.display()
            );
            println!("\n{}", "Discovering transect files...".bright_yellow());
        }

        // Step 1: Resolve every file to its location and date
        let files = self.discovery.discover().await?;
        if files.is_empty() {
            warn!(
                "No transect files under {}, writing an empty table",
                self.config.raw_dir.display()
            );
        }
        if interactive {
            println!(
                "  {} {} transect files",
                "Found".bright_green(),
                files.len().to_string().bright_white().bold()
            );
            println!("\n{}", "Parsing files...".bright_yellow());
        }

        // Step 2: Parse sequentially and fold into one frame
        let progress = self.progress_bar(files.len());
        let (combined, rows_per_location) = stream::iter(files.iter().map(Ok::<_, DepthError>))
            .and_then(|file| self.parse_survey_file(file))
            .inspect_ok(|_| progress.inc(1))
            .try_fold(
                (empty_output_frame()?, BTreeMap::new()),
                |(combined, mut rows_per_location), parsed| async move {
                    *rows_per_location.entry(parsed.location).or_insert(0) += parsed.rows;
                    let combined = combined.vstack(&parsed.frame)?;
                    Ok::<_, DepthError>((combined, rows_per_location))
                },
            )
            .await?;
        progress.finish_and_clear();

        // Step 3: Write once every file has parsed
        let writer = self.writer.clone();
        let rows_written = task::spawn_blocking(move || writer.write(combined)).await??;
        info!(
            "Wrote {} rows from {} files to {}",
            rows_written,
            files.len(),
            self.config.output_path.display()
        );

        let stats = ProcessingStats {
            files_processed: files.len(),
            rows_written,
            rows_per_location,
            output_path: self.config.output_path.clone(),
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        if interactive {
            print_summary(&stats);
        }

        Ok(stats)
    }

    /// Parse one file off the async runtime and annotate it
    async fn parse_survey_file(&self, file: &SurveyFile) -> Result<ParsedFile> {
        let workbooks = Arc::clone(&self.workbooks);
        let config = Arc::clone(&self.config);
        let survey = file.clone();

        let parsed = task::spawn_blocking(move || -> Result<ParsedFile> {
            let ctx = ParseContext::new(workbooks.as_ref(), config.as_ref());
            let table = survey.location.parse_file(&survey.path, &ctx)?;
            let rows = table.len();
            let frame = frame::annotate(
                frame::table_to_frame(&table)?,
                survey.date,
                survey.location,
            )?;
            Ok(ParsedFile {
                location: survey.location,
                rows,
                frame,
            })
        })
        .await??;

        debug!(
            "{} {}: {} rows from {}",
            file.location,
            file.date,
            parsed.rows,
            file.path.display()
        );
        Ok(parsed)
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb.set_message("Parsing transects...");
        pb
    }
}

fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files processed:".bright_cyan(),
        stats.files_processed.to_string().bright_white()
    );
    for (location, rows) in &stats.rows_per_location {
        println!(
            "    {} {}",
            format!("{}:", location).cyan(),
            rows.to_string().bright_white()
        );
    }
    println!(
        "  {} {}",
        "Total rows:".bright_cyan(),
        stats.rows_written.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        stats.output_path.display()
    );
}
