//! Configuration types for a single icon run

use crate::backends::rembg::DEFAULT_REMBG_PROGRAM;
use crate::error::{BgRemovalError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Suffix appended to the input stem when no output path is given
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_transparent";

/// Upper bound for `size` and `padding`, in pixels
pub const MAX_ICON_DIMENSION: u32 = 16_384;

/// Resolved options for one invocation
///
/// Paths are absolute once the config has been built. The config is never
/// mutated after `IconConfigBuilder::build` returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Image to remove the background from
    pub input: PathBuf,
    /// Destination PNG file
    pub output: PathBuf,
    /// Target length of the longer side in pixels (`None` or 0 keeps the size)
    pub size: Option<u32>,
    /// Transparent border added on every side before resizing
    pub padding: u32,
    /// Program used for background removal
    pub remover_program: PathBuf,
}

impl IconConfig {
    /// Create a new configuration builder for the given input
    pub fn builder<P: Into<PathBuf>>(input: P) -> IconConfigBuilder {
        IconConfigBuilder::new(input)
    }

    /// Target size, with 0 treated as "no resize"
    #[must_use]
    pub fn effective_size(&self) -> Option<u32> {
        self.size.filter(|size| *size > 0)
    }

    /// Validate configuration parameters
    ///
    /// # Errors
    /// - Padding or size above `MAX_ICON_DIMENSION`
    /// - Output path points at an existing directory
    pub fn validate(&self) -> Result<()> {
        if self.padding > MAX_ICON_DIMENSION {
            return Err(BgRemovalError::invalid_config(format!(
                "padding {} is too large (maximum {})",
                self.padding, MAX_ICON_DIMENSION
            )));
        }

        if let Some(size) = self.size.filter(|size| *size > MAX_ICON_DIMENSION) {
            return Err(BgRemovalError::invalid_config(format!(
                "size {} is too large (maximum {})",
                size, MAX_ICON_DIMENSION
            )));
        }

        if self.output.is_dir() {
            return Err(BgRemovalError::invalid_config(format!(
                "output path '{}' is a directory, expected a file path",
                self.output.display()
            )));
        }

        if self.remover_program.as_os_str().is_empty() {
            return Err(BgRemovalError::invalid_config(
                "remover program must not be empty",
            ));
        }

        Ok(())
    }
}

/// Builder for `IconConfig`
#[derive(Debug, Clone)]
pub struct IconConfigBuilder {
    input: PathBuf,
    output: Option<PathBuf>,
    size: Option<u32>,
    padding: u32,
    remover_program: PathBuf,
}

impl IconConfigBuilder {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            output: None,
            size: None,
            padding: 0,
            remover_program: PathBuf::from(DEFAULT_REMBG_PROGRAM),
        }
    }

    /// Set output path (defaults to `<stem>_transparent.png` next to the input)
    #[must_use]
    pub fn output<P: Into<PathBuf>>(mut self, output: Option<P>) -> Self {
        self.output = output.map(Into::into);
        self
    }

    /// Set target length of the longer side
    #[must_use]
    pub fn size(mut self, size: Option<u32>) -> Self {
        self.size = size;
        self
    }

    /// Set transparent padding in pixels
    #[must_use]
    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the background removal program
    #[must_use]
    pub fn remover_program<P: Into<PathBuf>>(mut self, program: P) -> Self {
        self.remover_program = program.into();
        self
    }

    /// Resolve paths and build the configuration
    ///
    /// # Errors
    /// - The current directory cannot be determined for a relative path
    /// - Validation failures from `IconConfig::validate`
    pub fn build(self) -> Result<IconConfig> {
        let input = absolute_path(&self.input)?;
        let output = match self.output {
            Some(output) => absolute_path(&output)?,
            None => default_output_path(&input),
        };

        let config = IconConfig {
            input,
            output,
            size: self.size,
            padding: self.padding,
            remover_program: self.remover_program,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Derive the default output path: same directory, `_transparent` suffix, `.png` extension
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let dir = input.parent().unwrap_or(Path::new("."));

    dir.join(format!(
        "{}{}.png",
        stem.to_string_lossy(),
        DEFAULT_OUTPUT_SUFFIX
    ))
}

/// Make a path absolute by joining relative paths onto the current directory
///
/// The filesystem is not consulted beyond reading the current directory, so
/// the path does not need to exist.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir()
        .map_err(|e| BgRemovalError::file_io_error("resolve current directory for", path, &e))?;
    Ok(cwd.join(path))
}
