//! Persists the generated outputs and runs the optional compressor.
//!
//! Primary writes are fatal on failure. The compressor is best effort: any
//! failure is reported as [`CompressionOutcome::Failed`] and the run goes on.

use crate::config::CompressionConfig;
use crate::errors::{GeneratorError, Result};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of the optional compression step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionOutcome {
    /// Compressed file written, with its size in bytes
    Compressed { path: PathBuf, size: u64 },
    /// Compression disabled (or dry run)
    Skipped,
    /// Compressor missing or failing; never fatal
    Failed(String),
}

impl CompressionOutcome {
    pub fn compressed_size(&self) -> Option<u64> {
        match self {
            CompressionOutcome::Compressed { size, .. } => Some(*size),
            _ => None,
        }
    }
}

impl fmt::Display for CompressionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionOutcome::Compressed { path, .. } => write!(f, "Compressed to {}", path.display()),
            CompressionOutcome::Skipped => f.write_str("Compression skipped"),
            CompressionOutcome::Failed(reason) => write!(f, "Failed to compress: {}", reason),
        }
    }
}

/// Write `content` to `path`, creating the parent directory first.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GeneratorError::OutputError {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }
    }

    write_atomic(path, content).map_err(|e| GeneratorError::OutputError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}

/// Write file atomically by writing to temp file then renaming
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);

    let written = write_temp(&temp_path, content).and_then(|()| fs::rename(&temp_path, path));
    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_temp(temp_path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

/// Run `<command> -f -q <quality> -o <output> <input>`.
pub fn compress(input: &Path, output: &Path, config: &CompressionConfig) -> CompressionOutcome {
    if !config.enabled {
        return CompressionOutcome::Skipped;
    }

    let status = Command::new(&config.command)
        .arg("-f")
        .arg("-q")
        .arg(config.quality.to_string())
        .arg("-o")
        .arg(output)
        .arg(input)
        .status();

    let outcome = match status {
        Err(e) => CompressionOutcome::Failed(format!("could not run '{}': {}", config.command, e)),
        Ok(status) if !status.success() => {
            CompressionOutcome::Failed(format!("'{}' exited with {}", config.command, status))
        }
        Ok(_) => match fs::metadata(output) {
            Ok(meta) => CompressionOutcome::Compressed {
                path: output.to_path_buf(),
                size: meta.len(),
            },
            Err(_) => CompressionOutcome::Failed(format!(
                "'{}' produced no file at {}",
                config.command,
                output.display()
            )),
        },
    };

    if let CompressionOutcome::Failed(reason) = &outcome {
        tracing::warn!(command = %config.command, "compression failed: {}", reason);
    }
    outcome
}
