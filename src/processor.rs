//! Icon processing pipeline
//!
//! `IconProcessor` runs the fixed sequence used for every invocation:
//! read input → background removal → decode → pad → resize → save PNG.
//! It is used by the CLI and can be driven directly as a library.

use crate::{
    backends::RembgRemover,
    config::IconConfig,
    error::Result,
    postprocessing,
    remover::BackgroundRemover,
    services::ImageIOService,
    types::{IconResult, ProcessingTimings},
};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Runs the icon pipeline for one configuration
pub struct IconProcessor {
    config: IconConfig,
    remover: Box<dyn BackgroundRemover>,
}

impl IconProcessor {
    /// Create a processor that uses the configured `rembg` program
    #[must_use]
    pub fn new(config: IconConfig) -> Self {
        let remover = RembgRemover::with_program(config.remover_program.clone());
        Self::with_remover(config, Box::new(remover))
    }

    /// Create a processor with a custom background remover
    #[must_use]
    pub fn with_remover(config: IconConfig, remover: Box<dyn BackgroundRemover>) -> Self {
        Self { config, remover }
    }

    #[must_use]
    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// Verify the background remover is usable
    ///
    /// # Errors
    /// - `BgRemovalError::MissingDependency` when it is not installed
    pub fn check_dependencies(&self) -> Result<()> {
        self.remover.check_available()
    }

    /// Remove the background from encoded image bytes and post-process the result
    ///
    /// Nothing is written to disk; `output_path` of the result is `None`.
    ///
    /// # Errors
    /// - Background removal failures, propagated unchanged
    /// - `BgRemovalError::Decode` when the removal output is not an image
    /// - Padding or resize failures
    #[instrument(skip_all, fields(remover = self.remover.name(), input_bytes = image_bytes.len()))]
    pub fn process_bytes(&self, image_bytes: &[u8]) -> Result<IconResult> {
        let mut timings = ProcessingTimings::new();
        let start = Instant::now();

        let stage = Instant::now();
        let removed = self.remover.remove(image_bytes)?;
        timings.removal_ms = elapsed_ms(stage);
        debug!(
            output_bytes = removed.len(),
            elapsed_ms = timings.removal_ms,
            "Background removed"
        );

        let stage = Instant::now();
        let decoded = ImageIOService::decode_rgba(&removed)?;
        let removal_dimensions = decoded.dimensions();
        timings.decode_ms = elapsed_ms(stage);

        let stage = Instant::now();
        let image = postprocessing::prepare_icon(
            decoded,
            self.config.padding,
            self.config.effective_size(),
        )?;
        timings.postprocessing_ms = elapsed_ms(stage);
        debug!(
            from_width = removal_dimensions.0,
            from_height = removal_dimensions.1,
            to_width = image.width(),
            to_height = image.height(),
            padding = self.config.padding,
            size = ?self.config.effective_size(),
            "Post-processing complete"
        );

        timings.total_ms = elapsed_ms(start);

        Ok(IconResult {
            image,
            removal_dimensions,
            output_path: None,
            timings,
        })
    }

    /// Run the full pipeline for the configured input and write the output PNG
    ///
    /// # Errors
    /// - `BgRemovalError::InvalidInput` when the input is missing or not a file
    /// - Any error from `process_bytes`
    /// - Output directory creation or PNG write failures
    #[instrument(skip_all, fields(input = %self.config.input.display()))]
    pub fn run(&self) -> Result<IconResult> {
        let start = Instant::now();

        let stage = Instant::now();
        let input_bytes = ImageIOService::read_input(&self.config.input)?;
        let read_ms = elapsed_ms(stage);

        info!("Removing background with {}", self.remover.name());
        let mut result = self.process_bytes(&input_bytes)?;
        result.timings.read_ms = read_ms;

        let stage = Instant::now();
        ImageIOService::save_png(&result.image, &self.config.output)?;
        result.timings.encode_ms = Some(elapsed_ms(stage));
        result.output_path = Some(self.config.output.clone());
        result.timings.total_ms = elapsed_ms(start);

        let (width, height) = result.dimensions();
        info!(
            output = %self.config.output.display(),
            width,
            height,
            total_ms = result.timings.total_ms,
            "Icon written"
        );

        Ok(result)
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
