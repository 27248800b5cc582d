//! Icon post-processing: transparent padding and proportional resize
//!
//! Both operations consume the image and return the result, so a no-op hands
//! back the same buffer without copying. Padding always runs before resizing.

use crate::error::{BgRemovalError, Result};
use image::{imageops, imageops::FilterType, RgbaImage};
use tracing::{debug, instrument};

/// Resampling filter used for resizing
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Largest RGBA canvas allocated while padding or resizing, in bytes
///
/// Matches the default `max_alloc` of `image::Limits` used when decoding.
pub const MAX_CANVAS_BYTES: u64 = 512 * 1024 * 1024;

/// Reject canvases whose RGBA buffer would exceed `MAX_CANVAS_BYTES`
fn ensure_canvas_fits(width: u32, height: u32, operation: &str) -> Result<()> {
    let bytes = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|pixels| pixels.checked_mul(4));

    match bytes {
        Some(bytes) if bytes <= MAX_CANVAS_BYTES && usize::try_from(bytes).is_ok() => Ok(()),
        _ => Err(BgRemovalError::processing(format!(
            "{} to {}x{} exceeds the maximum canvas size of {} bytes",
            operation, width, height, MAX_CANVAS_BYTES
        ))),
    }
}

/// Add a uniform transparent border of `padding` pixels on every side
///
/// The source pixels are copied, not blended, so fully and partially
/// transparent pixels keep their exact RGBA values at offset `(padding, padding)`.
///
/// # Errors
/// - The padded canvas would exceed `MAX_CANVAS_BYTES`
#[instrument(level = "debug", skip(image), fields(width = image.width(), height = image.height()))]
pub fn add_padding(image: RgbaImage, padding: u32) -> Result<RgbaImage> {
    if padding == 0 {
        return Ok(image);
    }

    let (width, height) = image.dimensions();
    let (padded_width, padded_height) = padding
        .checked_mul(2)
        .and_then(|border| Some((width.checked_add(border)?, height.checked_add(border)?)))
        .ok_or_else(|| {
            BgRemovalError::processing(format!(
                "padding {} on a {}x{} image exceeds the maximum canvas size",
                padding, width, height
            ))
        })?;
    ensure_canvas_fits(padded_width, padded_height, "padding")?;

    let mut canvas = RgbaImage::new(padded_width, padded_height);
    let offset = i64::from(padding);
    imageops::replace(&mut canvas, &image, offset, offset);

    debug!(padded_width, padded_height, "Added transparent padding");
    Ok(canvas)
}

/// Compute the dimensions after scaling the longer side to `target`
///
/// The shorter side is scaled by the same ratio, rounded to the nearest
/// integer and never smaller than 1. Square images become `target x target`.
#[must_use]
pub fn scaled_dimensions(width: u32, height: u32, target: u32) -> (u32, u32) {
    if width >= height {
        (target, scale_side(height, width, target))
    } else {
        (scale_side(width, height, target), target)
    }
}

fn scale_side(short: u32, long: u32, target: u32) -> u32 {
    let scaled = (f64::from(short) * f64::from(target) / f64::from(long)).round();
    (scaled as u32).max(1)
}

/// Resize so the longer side equals `target`, preserving aspect ratio
///
/// `None` or `Some(0)` leaves the image untouched.
///
/// # Errors
/// - The image has a zero dimension
/// - The resized canvas would exceed `MAX_CANVAS_BYTES`
#[instrument(level = "debug", skip(image), fields(width = image.width(), height = image.height()))]
pub fn resize_to_longest_side(image: RgbaImage, target: Option<u32>) -> Result<RgbaImage> {
    let Some(target) = target.filter(|size| *size > 0) else {
        return Ok(image);
    };

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(BgRemovalError::processing(format!(
            "cannot resize an empty {}x{} image",
            width, height
        )));
    }

    let (new_width, new_height) = scaled_dimensions(width, height, target);
    if (new_width, new_height) == (width, height) {
        debug!("Image already at target size");
        return Ok(image);
    }
    ensure_canvas_fits(new_width, new_height, "resizing")?;

    let resized = imageops::resize(&image, new_width, new_height, RESIZE_FILTER);
    debug!(new_width, new_height, "Resized image");
    Ok(resized)
}

/// Apply padding then resize
///
/// # Errors
/// - Errors from `add_padding` or `resize_to_longest_side`
pub fn prepare_icon(image: RgbaImage, padding: u32, size: Option<u32>) -> Result<RgbaImage> {
    let padded = add_padding(image, padding)?;
    resize_to_longest_side(padded, size)
}
