//! Background removal backends
//!
//! - `rembg` backend: drives the external `rembg` command-line tool

pub mod rembg;

// Test utilities for backend testing
#[cfg(test)]
pub mod test_utils;

pub use self::rembg::RembgRemover;
