//! Command-line interface components.

use crate::config::DepthsConfig;
use crate::models::ProcessingStats;
use crate::processor::DepthProcessor;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "snow_depths")]
#[command(about = "Normalize SnowEx 2021 time-series depth transects into one CSV table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and hide progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the run configuration; input and output paths are always the fixed defaults
    pub fn to_config(&self) -> DepthsConfig {
        let mut config = DepthsConfig::default();
        if !self.show_progress() {
            config = config.without_progress();
        }
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("snow_depths={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to install log subscriber")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to install log subscriber")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Run one normalization pass with the given arguments
pub async fn run(args: Args) -> Result<ProcessingStats> {
    setup_logging(&args)?;

    let config = args.to_config();
    debug!("Configuration: {:?}", config);

    let processor = DepthProcessor::new(config).context("Invalid configuration")?;
    let raw_dir = processor.config().raw_dir.clone();
    let stats = processor
        .process()
        .await
        .with_context(|| format!("Failed to normalize transects under {}", raw_dir.display()))?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_RAW_DIR};
    use std::path::PathBuf;

    #[test]
    fn test_no_arguments_uses_fixed_defaults() {
        let args = Args::try_parse_from(["snow_depths"]).unwrap();
        let config = args.to_config();

        assert_eq!(config.raw_dir, PathBuf::from(DEFAULT_RAW_DIR));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(config.show_progress);
        assert_eq!(args.get_log_level(), "warn");
    }

    #[test]
    fn test_verbosity_levels() {
        let args = Args::try_parse_from(["snow_depths", "-vv"]).unwrap();
        assert_eq!(args.get_log_level(), "debug");
        assert_eq!(args.to_config().raw_dir, PathBuf::from(DEFAULT_RAW_DIR));

        let args = Args::try_parse_from(["snow_depths", "-vvvv"]).unwrap();
        assert_eq!(args.get_log_level(), "trace");
    }

    #[test]
    fn test_path_flags_are_rejected() {
        assert!(Args::try_parse_from(["snow_depths", "--raw-dir", "/data/raw"]).is_err());
        assert!(Args::try_parse_from(["snow_depths", "--output", "/tmp/out.csv"]).is_err());
    }

    #[test]
    fn test_quiet_hides_progress() {
        let args = Args::try_parse_from(["snow_depths", "--quiet"]).unwrap();
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.to_config().show_progress);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["snow_depths", "-q", "-v"]).is_err());
    }
}
