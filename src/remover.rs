//! Background removal capability abstraction

use crate::error::Result;

/// An external capability that turns image bytes into image bytes with the
/// background made transparent
///
/// Implementations are opaque: the pipeline calls `remove` exactly once per
/// run, without retries or timeouts, and propagates any error unchanged.
pub trait BackgroundRemover {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Verify the capability can be used before any work starts
    ///
    /// # Errors
    /// - `BgRemovalError::MissingDependency` when the capability is not installed
    fn check_available(&self) -> Result<()>;

    /// Remove the background from an encoded image
    ///
    /// The returned bytes are an encoded image in whatever format the
    /// capability chooses (normally PNG).
    ///
    /// # Errors
    /// - Failures reported by the capability itself
    /// - I/O failures while handing data to or from it
    fn remove(&self, image_bytes: &[u8]) -> Result<Vec<u8>>;
}
