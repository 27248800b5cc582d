//! Configuration conversion utilities for CLI arguments

use crate::cli::main_impl::Cli;
use crate::config::IconConfig;
use anyhow::{Context, Result};

/// Convert CLI arguments to an `IconConfig`
pub(crate) struct CliConfigBuilder;

impl CliConfigBuilder {
    /// Build `IconConfig` from CLI arguments, resolving paths to absolute form
    pub(crate) fn from_cli(cli: &Cli) -> Result<IconConfig> {
        let config = IconConfig::builder(&cli.input)
            .output(cli.output.as_ref())
            .size(cli.size)
            .padding(cli.padding)
            .remover_program(&cli.remover_bin)
            .build()
            .context("Invalid configuration")?;

        Ok(config)
    }
}
