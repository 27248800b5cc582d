//! Icon background removal CLI
//!
//! Parses arguments, checks that the background remover is installed, then
//! runs the icon pipeline once and prints the written path.

use super::config::CliConfigBuilder;
use crate::{processor::IconProcessor, tracing_config::TracingFormat};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Remove the background from an image and save it as a transparent PNG icon
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "icon-bgremove")]
pub struct Cli {
    /// Input image file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PNG file [default: <INPUT_STEM>_transparent.png next to the input]
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Resize so the longer side is SIZE pixels, keeping the aspect ratio (0 = keep size)
    #[arg(long, value_name = "SIZE")]
    pub size: Option<u32>,

    /// Transparent padding in pixels added on every side before resizing
    #[arg(long, value_name = "PIXELS", default_value_t = 0)]
    pub padding: u32,

    /// Background removal program following the `rembg i <input> <output>` contract
    #[arg(long, value_name = "PATH", default_value = "rembg")]
    pub remover_bin: PathBuf,

    /// Enable verbose logging (-v: DEBUG, -vv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = CliLogFormat::Console)]
    pub log_format: CliLogFormat,

    /// Explicit tracing filter directive (e.g. "icon_bgremove=trace"), overrides -v
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum CliLogFormat {
    Console,
    Compact,
    #[cfg(feature = "tracing-json")]
    Json,
}

impl From<CliLogFormat> for TracingFormat {
    fn from(format: CliLogFormat) -> Self {
        match format {
            CliLogFormat::Console => Self::Console,
            CliLogFormat::Compact => Self::Compact,
            #[cfg(feature = "tracing-json")]
            CliLogFormat::Json => Self::Json,
        }
    }
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli).context("Failed to initialize tracing")?;

    let config = CliConfigBuilder::from_cli(&cli).context("Invalid arguments")?;
    match serde_json::to_string(&config) {
        Ok(json) => debug!(config = %json, "Resolved configuration"),
        Err(error) => warn!(%error, "Failed to serialize resolved configuration"),
    }

    let processor = IconProcessor::new(config);
    processor
        .check_dependencies()
        .context("Background removal is not available")?;

    info!("Input: {}", processor.config().input.display());

    let spinner = create_spinner(cli.quiet);
    let result = processor.run();
    spinner.finish_and_clear();

    let result = result.context("Failed to create icon")?;

    let timings = result.timings();
    info!(
        "Processed in {}ms (removal {}ms, {:.0}% of total)",
        timings.total_ms,
        timings.removal_ms,
        timings.removal_ratio() * 100.0
    );
    debug!(
        read_ms = timings.read_ms,
        decode_ms = timings.decode_ms,
        postprocessing_ms = timings.postprocessing_ms,
        encode_ms = timings.encode_ms.unwrap_or_default(),
        "Stage timings"
    );

    if let Some(path) = result.output_path() {
        println!("{}", path.display());
    }

    Ok(())
}

/// Initialize tracing based on verbosity flags
fn init_tracing(cli: &Cli) -> Result<()> {
    use crate::tracing_config::TracingConfig;

    let mut config = TracingConfig::new()
        .with_verbosity(cli.verbose)
        .with_quiet(cli.quiet)
        .with_format(cli.log_format.into());

    if let Some(filter) = &cli.log_filter {
        config = config.with_env_filter(filter.clone());
    }

    config.init()
}

/// Spinner shown on stderr while the remover runs (hidden when not a terminal)
fn create_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message("Removing background");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
