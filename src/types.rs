//! Result and timing types for icon processing

use image::RgbaImage;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Per-stage timings of one run, in milliseconds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingTimings {
    /// Reading the input file
    pub read_ms: u64,

    /// External background removal call
    pub removal_ms: u64,

    /// Decoding the removal output into RGBA
    pub decode_ms: u64,

    /// Padding and resizing
    pub postprocessing_ms: u64,

    /// PNG encoding and write (only when saved to a file)
    pub encode_ms: Option<u64>,

    /// Total end-to-end processing time
    pub total_ms: u64,
}

impl ProcessingTimings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of the total spent inside the external remover
    #[must_use]
    pub fn removal_ratio(&self) -> f64 {
        if self.total_ms == 0 {
            0.0
        } else {
            self.removal_ms as f64 / self.total_ms as f64
        }
    }
}

/// Outcome of processing one image
#[derive(Debug, Clone)]
pub struct IconResult {
    /// Final RGBA icon
    pub image: RgbaImage,

    /// Dimensions of the image returned by background removal
    pub removal_dimensions: (u32, u32),

    /// Where the icon was written, if it was saved
    pub output_path: Option<PathBuf>,

    /// Stage timings
    pub timings: ProcessingTimings,
}

impl IconResult {
    /// Final icon dimensions
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    #[must_use]
    pub fn timings(&self) -> &ProcessingTimings {
        &self.timings
    }
}
