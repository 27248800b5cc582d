//! Error handling and edge case testing
//!
//! Boundary conditions for configuration, post-processing and file paths.

use icon_bgremove::{
    add_padding, config::MAX_ICON_DIMENSION, default_output_path, resize_to_longest_side, scaled_dimensions,
    BackgroundRemover, BgRemovalError, IconConfig, IconProcessor, Result,
};
use image::{Rgba, RgbaImage};
use std::path::Path;
use tempfile::TempDir;

struct FixedOutputRemover(Vec<u8>);

impl BackgroundRemover for FixedOutputRemover {
    fn name(&self) -> &str {
        "fixed"
    }

    fn check_available(&self) -> Result<()> {
        Ok(())
    }

    fn remove(&self, _image_bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_config_validation_edge_cases() -> Result<()> {
    // Largest accepted padding
    let config = IconConfig::builder("/tmp/edge.png")
        .padding(MAX_ICON_DIMENSION)
        .build()?;
    assert_eq!(config.padding, MAX_ICON_DIMENSION);

    // One past it is rejected with the limit in the message
    let error = IconConfig::builder("/tmp/edge.png")
        .padding(MAX_ICON_DIMENSION + 1)
        .build()
        .unwrap_err();
    assert!(matches!(error, BgRemovalError::InvalidConfig(_)));
    assert!(error.to_string().contains("too large"));

    // Same bound for the target size
    let error = IconConfig::builder("/tmp/edge.png")
        .size(Some(MAX_ICON_DIMENSION + 1))
        .build()
        .unwrap_err();
    assert!(matches!(error, BgRemovalError::InvalidConfig(_)));

    // Empty remover program
    let error = IconConfig::builder("/tmp/edge.png")
        .remover_program("")
        .build()
        .unwrap_err();
    assert!(matches!(error, BgRemovalError::InvalidConfig(_)));

    Ok(())
}

#[test]
fn test_image_edge_cases() -> Result<()> {
    // 1x1 image padded and scaled
    let tiny = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255]));
    let padded = add_padding(tiny, 1)?;
    assert_eq!(padded.dimensions(), (3, 3));
    assert_eq!(*padded.get_pixel(1, 1), Rgba([255, 0, 0, 255]));

    let resized = resize_to_longest_side(padded, Some(300))?;
    assert_eq!(resized.dimensions(), (300, 300));

    // Very wide and very tall images keep at least one pixel on the short side
    let wide = resize_to_longest_side(RgbaImage::new(1000, 1), Some(10))?;
    assert_eq!(wide.dimensions(), (10, 1));

    let tall = resize_to_longest_side(RgbaImage::new(1, 1000), Some(10))?;
    assert_eq!(tall.dimensions(), (1, 10));

    // Large target relative to a small image
    assert_eq!(scaled_dimensions(3, 2, 4096), (4096, 2731));

    Ok(())
}

#[test]
fn test_padding_exceeding_canvas_is_processing_error() {
    let image = RgbaImage::new(10, 10);
    let error = add_padding(image, 2_000_000_000).unwrap_err();
    assert!(matches!(error, BgRemovalError::Processing(_)));
    assert!(error.to_string().contains("maximum canvas size"));
}

#[test]
fn test_empty_removal_output_is_decode_error() {
    let config = IconConfig::builder("/tmp/unused.png").build().unwrap();
    let processor = IconProcessor::with_remover(config, Box::new(FixedOutputRemover(Vec::new())));

    let error = processor.process_bytes(b"input").unwrap_err();
    assert!(matches!(error, BgRemovalError::Decode(_)));
    assert!(error.to_string().contains("0 bytes"));
}

#[test]
fn test_html_removal_output_is_decode_error() {
    let config = IconConfig::builder("/tmp/unused.png").build().unwrap();
    let body = b"<!doctype html><title>502 Bad Gateway</title>".to_vec();
    let processor = IconProcessor::with_remover(config, Box::new(FixedOutputRemover(body)));

    let error = processor.process_bytes(b"input").unwrap_err();
    assert!(matches!(error, BgRemovalError::Decode(_)));
    assert!(error.to_string().contains("unknown"));
}

#[test]
fn test_directory_input_is_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    let config = IconConfig::builder(temp_dir.path()).build().unwrap();
    let processor =
        IconProcessor::with_remover(config, Box::new(FixedOutputRemover(Vec::new())));

    let error = processor.run().unwrap_err();
    assert!(matches!(error, BgRemovalError::InvalidInput(_)));
    assert!(error.to_string().contains("not a regular file"));
}

#[test]
fn test_file_path_edge_cases() {
    let cases = [
        ("simple.png", "simple_transparent.png"),
        ("file with spaces.jpg", "file with spaces_transparent.png"),
        ("file.with.many.dots.png", "file.with.many.dots_transparent.png"),
        ("UPPERCASE.PNG", "UPPERCASE_transparent.png"),
        ("MiXeD_CaSe.JpEg", "MiXeD_CaSe_transparent.png"),
        ("symbols@#$%.webp", "symbols@#$%_transparent.png"),
        ("ícone-测试.tiff", "ícone-测试_transparent.png"),
        (".hidden", ".hidden_transparent.png"),
    ];

    for (input, expected) in cases {
        let output = default_output_path(&Path::new("/icons").join(input));
        assert_eq!(output, Path::new("/icons").join(expected), "input: {input}");
    }
}
