//! Image I/O operations service
//!
//! Keeps file access and byte decoding apart from the pipeline logic.

use crate::error::{BgRemovalError, Result};
use image::{ImageFormat, RgbaImage};
use std::path::Path;
use tracing::{debug, trace};

/// Magic number table used for diagnostics: (offset, signature, format name)
const SIGNATURES: &[(usize, &[u8], &str)] = &[
    (0, &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A], "png"),
    (0, &[0xFF, 0xD8, 0xFF], "jpg"),
    (8, b"WEBP", "webp"),
    (0, &[b'I', b'I', 0x2A, 0x00], "tiff"),
    (0, &[b'M', b'M', 0x00, 0x2A], "tiff"),
    (0, b"GIF8", "gif"),
    (0, b"BM", "bmp"),
];

/// Service for handling image file input/output operations
pub struct ImageIOService;

impl ImageIOService {
    /// Check that the input path exists and is a regular file
    ///
    /// # Errors
    /// - `BgRemovalError::InvalidInput` if the path is missing or not a file
    pub fn ensure_input_file<P: AsRef<Path>>(path: P) -> Result<()> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(BgRemovalError::invalid_input(format!(
                "input file not found: {}",
                path_ref.display()
            )));
        }

        if !path_ref.is_file() {
            return Err(BgRemovalError::invalid_input(format!(
                "input is not a regular file: {}",
                path_ref.display()
            )));
        }

        Ok(())
    }

    /// Read the raw bytes of the input image
    ///
    /// # Errors
    /// - Input validation failures from `ensure_input_file`
    /// - Read failures
    pub fn read_input<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        let path_ref = path.as_ref();
        Self::ensure_input_file(path_ref)?;

        let data = std::fs::read(path_ref)
            .map_err(|e| BgRemovalError::file_io_error("read input image", path_ref, &e))?;
        trace!(path = %path_ref.display(), bytes = data.len(), "Read input image");

        Ok(data)
    }

    /// Decode bytes returned by background removal into an RGBA raster
    ///
    /// # Errors
    /// - `BgRemovalError::Decode` if the bytes are not a decodable image
    pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage> {
        let detected = detect_image_format(bytes);

        let image = image::load_from_memory(bytes).map_err(|e| {
            BgRemovalError::undecodable_output(bytes.len(), detected, &e.to_string())
        })?;

        debug!(
            format = detected.unwrap_or("unknown"),
            width = image.width(),
            height = image.height(),
            color = ?image.color(),
            "Decoded background removal output"
        );

        Ok(image.to_rgba8())
    }

    /// Save an RGBA image as PNG, creating parent directories as needed
    ///
    /// An existing file at `path` is overwritten.
    ///
    /// # Errors
    /// - Directory creation failures
    /// - PNG encoding or write failures
    pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
        let path_ref = path.as_ref();

        if let Some(parent) = path_ref.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BgRemovalError::file_io_error("create output directory", parent, &e)
            })?;
        }

        image.save_with_format(path_ref, ImageFormat::Png)?;
        debug!(path = %path_ref.display(), "Saved PNG");

        Ok(())
    }
}

/// Detect image format from binary data by examining magic bytes
#[must_use]
pub fn detect_image_format(data: &[u8]) -> Option<&'static str> {
    if data.len() < 4 {
        return None;
    }

    SIGNATURES.iter().find_map(|(offset, signature, name)| {
        let end = offset + signature.len();
        let matches = data.get(*offset..end).is_some_and(|slice| slice == *signature);
        // WebP also needs the RIFF container header
        let container_ok = *name != "webp" || data.get(0..4).is_some_and(|slice| slice == b"RIFF");
        (matches && container_ok).then_some(*name)
    })
}
