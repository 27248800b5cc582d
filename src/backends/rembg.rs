//! `rembg` command-line backend
//!
//! Hands the input bytes to `rembg i <input> <output>` through a private
//! scratch directory and reads the PNG it writes back into memory.

use crate::{
    error::{BgRemovalError, Result},
    remover::BackgroundRemover,
};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::{debug, instrument, trace};

/// Program looked up on `PATH` when no explicit remover is configured
pub const DEFAULT_REMBG_PROGRAM: &str = "rembg";

const SCRATCH_PREFIX: &str = "icon-bgremove-";

/// Background remover backed by the `rembg` executable
#[derive(Debug, Clone)]
pub struct RembgRemover {
    program: PathBuf,
}

impl RembgRemover {
    /// Use `rembg` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_REMBG_PROGRAM)
    }

    /// Use a specific executable that follows the `rembg i <input> <output>` contract
    pub fn with_program<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn program_display(&self) -> String {
        self.program.display().to_string()
    }
}

impl Default for RembgRemover {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundRemover for RembgRemover {
    fn name(&self) -> &str {
        "rembg"
    }

    fn check_available(&self) -> Result<()> {
        let program = self.program_display();
        let status = Command::new(&self.program)
            .arg("--help")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => {
                debug!(program = %program, "Background remover available");
                Ok(())
            },
            Ok(status) => Err(BgRemovalError::missing_dependency(
                &program,
                &format!("probe exited with {}", status),
            )),
            Err(e) => Err(BgRemovalError::missing_dependency(&program, &e.to_string())),
        }
    }

    #[instrument(skip_all, fields(program = %self.program.display(), input_bytes = image_bytes.len()))]
    fn remove(&self, image_bytes: &[u8]) -> Result<Vec<u8>> {
        let program = self.program_display();
        let scratch = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir()
            .map_err(|e| {
                BgRemovalError::file_io_error("create scratch directory in", std::env::temp_dir(), &e)
            })?;

        let input_path = scratch.path().join("input");
        let output_path = scratch.path().join("output.png");

        std::fs::write(&input_path, image_bytes)
            .map_err(|e| BgRemovalError::file_io_error("write remover input", &input_path, &e))?;
        trace!(path = %input_path.display(), "Wrote remover input");

        let start = Instant::now();
        let output = Command::new(&self.program)
            .arg("i")
            .arg(&input_path)
            .arg(&output_path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BgRemovalError::missing_dependency(&program, &e.to_string())
                } else {
                    BgRemovalError::file_io_error("run", &self.program, &e)
                }
            })?;
        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            status = %output.status,
            "Remover finished"
        );

        if !output.status.success() {
            return Err(BgRemovalError::removal_failed(
                &program,
                &output.status.to_string(),
                &String::from_utf8_lossy(&output.stderr),
            ));
        }

        let bytes = std::fs::read(&output_path).map_err(|e| {
            BgRemovalError::removal(format!(
                "'{}' reported success but its output could not be read: {}",
                program, e
            ))
        })?;
        trace!(output_bytes = bytes.len(), "Read remover output");

        Ok(bytes)
    }
}
