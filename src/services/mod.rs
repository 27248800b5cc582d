//! Service layer for separating concerns
//!
//! File access and byte decoding live here so the processor only
//! orchestrates the pipeline stages.

pub mod io;

pub use io::{detect_image_format, ImageIOService};
