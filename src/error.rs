//! Error types for icon background removal operations

use std::path::Path;
use thiserror::Error;

/// Result type alias for icon background removal operations
pub type Result<T> = std::result::Result<T, BgRemovalError>;

/// Error types for the icon pipeline
#[derive(Error, Debug)]
pub enum BgRemovalError {
    /// Input/output errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding or manipulation errors
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// The external background removal capability is not installed or not runnable
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    /// Input path does not exist or is not a regular file
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The external remover ran but reported a failure
    #[error("Background removal failed: {0}")]
    Removal(String),

    /// Bytes returned by the remover could not be decoded as a raster image
    #[error("Decode error: {0}")]
    Decode(String),

    /// Post-processing errors (padding, resizing)
    #[error("Processing error: {0}")]
    Processing(String),
}

impl BgRemovalError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new processing error
    pub fn processing<S: Into<String>>(msg: S) -> Self {
        Self::Processing(msg.into())
    }

    /// Create a new removal error
    pub fn removal<S: Into<String>>(msg: S) -> Self {
        Self::Removal(msg.into())
    }

    /// Create file I/O error with operation context
    pub fn file_io_error<P: AsRef<Path>>(operation: &str, path: P, error: &std::io::Error) -> Self {
        let path_display = path.as_ref().display();
        Self::Io(std::io::Error::new(
            error.kind(),
            format!("Failed to {} '{}': {}", operation, path_display, error),
        ))
    }

    /// Create a missing dependency error with installation guidance
    pub fn missing_dependency(program: &str, reason: &str) -> Self {
        Self::MissingDependency(format!(
            "'{}' is not available ({}). Install it with `pip install \"rembg[cli]\"` \
             or point --remover-bin at an existing executable",
            program, reason
        ))
    }

    /// Create a removal error carrying the remover's exit status and stderr
    pub fn removal_failed(program: &str, status: &str, stderr: &str) -> Self {
        let stderr = stderr.trim();
        let details = if stderr.is_empty() {
            String::new()
        } else {
            format!(": {}", stderr)
        };

        Self::Removal(format!("'{}' exited with {}{}", program, status, details))
    }

    /// Create a decode error for bytes that are not a supported raster
    pub fn undecodable_output(byte_count: usize, detected: Option<&str>, error: &str) -> Self {
        Self::Decode(format!(
            "background removal returned {} bytes that could not be decoded as an image \
             (detected format: {}): {}",
            byte_count,
            detected.unwrap_or("unknown"),
            error
        ))
    }
}
