#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

//! # Icon Background Removal
//!
//! Turns an arbitrary picture into a transparent PNG suitable for use as an
//! application icon. Segmentation is delegated to an external background
//! removal tool (`rembg`); this crate handles the surrounding pipeline:
//!
//! 1. read the input image bytes
//! 2. hand them to the background remover
//! 3. decode the result into RGBA
//! 4. add optional transparent padding
//! 5. optionally resize so the longer side matches a target length
//! 6. write the PNG, creating parent directories as needed
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use icon_bgremove::{IconConfig, IconProcessor};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = IconConfig::builder("logo.jpg")
//!     .size(Some(256))
//!     .padding(16)
//!     .build()?;
//!
//! let processor = IconProcessor::new(config);
//! processor.check_dependencies()?;
//! let result = processor.run()?;
//! println!("wrote {:?} ({:?})", result.output_path(), result.dimensions());
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom removers
//!
//! Anything implementing [`BackgroundRemover`] can replace the `rembg`
//! backend, for example to call a remote service:
//!
//! ```rust,no_run
//! use icon_bgremove::{BackgroundRemover, IconConfig, IconProcessor, Result};
//!
//! struct Passthrough;
//!
//! impl BackgroundRemover for Passthrough {
//!     fn name(&self) -> &str { "passthrough" }
//!     fn check_available(&self) -> Result<()> { Ok(()) }
//!     fn remove(&self, image_bytes: &[u8]) -> Result<Vec<u8>> { Ok(image_bytes.to_vec()) }
//! }
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = IconConfig::builder("logo.png").build()?;
//! let processor = IconProcessor::with_remover(config, Box::new(Passthrough));
//! let _icon = processor.process_bytes(&std::fs::read("logo.png")?)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Feature Flags
//!
//! - `cli` (default): command-line interface, spinner and tracing subscriber setup
//! - `webp-support` (default): WebP input decoding
//! - `tracing-json`: JSON log output for the CLI

pub mod backends;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod postprocessing;
pub mod processor;
pub mod remover;
pub mod services;
#[cfg(feature = "cli")]
pub mod tracing_config;
pub mod types;

// Public API exports
pub use backends::RembgRemover;
pub use config::{default_output_path, IconConfig, IconConfigBuilder};
pub use error::{BgRemovalError, Result};
pub use postprocessing::{add_padding, resize_to_longest_side, scaled_dimensions};
pub use processor::IconProcessor;
pub use remover::BackgroundRemover;
pub use services::{detect_image_format, ImageIOService};
pub use types::{IconResult, ProcessingTimings};

#[cfg(feature = "cli")]
pub use tracing_config::{TracingConfig, TracingFormat};
