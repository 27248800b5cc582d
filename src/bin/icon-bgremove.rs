//! Icon background removal CLI tool
//!
//! Command-line interface for turning an image into a transparent PNG icon
//! using the icon-bgremove library.

#[cfg(feature = "cli")]
use icon_bgremove::cli;

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    cli::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("CLI feature not enabled. Please rebuild with --features cli");
}
