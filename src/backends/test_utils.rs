//! Test utilities and mock removers
//!
//! Mock implementations of the `BackgroundRemover` trait so the pipeline can
//! be tested without an installed `rembg`.

use crate::{
    error::{BgRemovalError, Result},
    remover::BackgroundRemover,
};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

/// What the mock hands back from `remove`
#[derive(Debug, Clone)]
pub enum MockOutput {
    /// Return the input bytes untouched
    Echo,
    /// Return a fixed RGBA image encoded as PNG
    Image(RgbaImage),
    /// Return arbitrary bytes
    Raw(Vec<u8>),
}

/// Mock background remover with call history and failure injection
#[derive(Debug, Clone)]
pub struct MockRemover {
    output: MockOutput,
    call_history: Arc<Mutex<Vec<String>>>,
    unavailable: bool,
    should_fail_removal: bool,
}

impl MockRemover {
    /// Mock that echoes its input
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: MockOutput::Echo,
            call_history: Arc::new(Mutex::new(Vec::new())),
            unavailable: false,
            should_fail_removal: false,
        }
    }

    /// Mock that always returns the given image as PNG bytes
    #[must_use]
    pub fn returning_image(image: RgbaImage) -> Self {
        Self {
            output: MockOutput::Image(image),
            ..Self::new()
        }
    }

    /// Mock that returns arbitrary bytes
    #[must_use]
    pub fn returning_bytes(bytes: Vec<u8>) -> Self {
        Self {
            output: MockOutput::Raw(bytes),
            ..Self::new()
        }
    }

    /// Mock that reports itself as not installed
    #[must_use]
    pub fn new_unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }

    /// Mock that fails during removal
    #[must_use]
    pub fn new_failing_removal() -> Self {
        Self {
            should_fail_removal: true,
            ..Self::new()
        }
    }

    /// Get the call history for verification in tests
    pub fn get_call_history(&self) -> Vec<String> {
        self.call_history.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.call_history.lock().unwrap().push(call);
    }
}

impl Default for MockRemover {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundRemover for MockRemover {
    fn name(&self) -> &str {
        "mock"
    }

    fn check_available(&self) -> Result<()> {
        self.record("check_available".to_string());
        if self.unavailable {
            return Err(BgRemovalError::missing_dependency("mock", "simulated"));
        }
        Ok(())
    }

    fn remove(&self, image_bytes: &[u8]) -> Result<Vec<u8>> {
        self.record(format!("remove({} bytes)", image_bytes.len()));
        if self.should_fail_removal {
            return Err(BgRemovalError::removal("simulated removal failure"));
        }

        match &self.output {
            MockOutput::Echo => Ok(image_bytes.to_vec()),
            MockOutput::Raw(bytes) => Ok(bytes.clone()),
            MockOutput::Image(image) => encode_png(image),
        }
    }
}

/// Encode an RGBA image as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Deterministic RGBA test image with a gradient and varying alpha
#[must_use]
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([
            (x % 256) as u8,
            (y % 256) as u8,
            ((x + y) % 256) as u8,
            (255 - (x * 7 + y * 3) % 200) as u8,
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_calls() {
        let mock = MockRemover::new();
        mock.check_available().unwrap();
        let output = mock.remove(&[1, 2, 3]).unwrap();

        assert_eq!(output, vec![1, 2, 3]);
        assert_eq!(
            mock.get_call_history(),
            vec!["check_available".to_string(), "remove(3 bytes)".to_string()]
        );
    }

    #[test]
    fn test_mock_failure_injection() {
        assert!(MockRemover::new_unavailable().check_available().is_err());
        assert!(MockRemover::new_failing_removal().remove(&[0]).is_err());
    }

    #[test]
    fn test_mock_image_output_is_png() {
        let mock = MockRemover::returning_image(gradient_image(4, 3));
        let bytes = mock.remove(b"ignored").unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }
}
