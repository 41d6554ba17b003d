//! Read -> convert -> write for one file, and the batch runner around it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rigel_anim_core::{convert_animation_with, Diagnostics, TOOL_TAG};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::config::ConvertConfig;
use crate::paths::{discover_inputs, resolve_output_path};
use crate::writer::to_ascii_pretty_vec;

/// Per-file I/O failures. None of them stop a batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to list inputs under {}: {source}", .path.display())]
    Discover { path: PathBuf, source: io::Error },
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Converted { output: PathBuf },
    SkippedExisting { output: PathBuf },
}

/// Convert a single file. An existing `output` is left alone unless
/// `overwrite` is set; in that case the input is not even read.
pub fn convert_file(
    input: &Path,
    output: &Path,
    overwrite: bool,
    diag: &mut Diagnostics,
) -> Result<FileOutcome, PipelineError> {
    if output.exists() && !overwrite {
        diag.warn(format!(
            "Skipping {}; output exists: {}",
            input.display(),
            output.display()
        ));
        return Ok(FileOutcome::SkippedExisting {
            output: output.to_path_buf(),
        });
    }

    let text = fs::read_to_string(input).map_err(|source| PipelineError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let source: JsonValue = serde_json::from_str(&text).map_err(|source| PipelineError::Parse {
        path: input.to_path_buf(),
        source,
    })?;

    let label = input.display().to_string();
    let converted = convert_animation_with(&source, &label, diag);
    let bytes = to_ascii_pretty_vec(&converted).map_err(|source| PipelineError::Serialize {
        path: output.to_path_buf(),
        source,
    })?;

    write_output(output, &bytes).map_err(|source| PipelineError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "[{TOOL_TAG}] Converted {} -> {}",
        input.display(),
        output.display()
    );
    Ok(FileOutcome::Converted {
        output: output.to_path_buf(),
    })
}

/// Create missing parent directories, then write.
fn write_output(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)
}

/// Totals for one run.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    /// Output paths written, in processing order.
    pub converted: Vec<PathBuf>,
    pub skipped: usize,
    /// One rendered [`PipelineError`] per file that could not be converted.
    pub failures: Vec<String>,
    /// Diagnostics raised across the run. The messages themselves go to
    /// `tracing` and are not retained.
    pub warning_count: usize,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// 0 when at least one file was converted, otherwise 1.
    pub fn exit_code(&self) -> u8 {
        if self.converted.is_empty() {
            1
        } else {
            0
        }
    }
}

/// Convert every discovered input. Per-file failures are logged and counted;
/// only failing to enumerate the input directory is an error.
pub fn run(config: &ConvertConfig) -> Result<BatchReport, PipelineError> {
    let inputs = discover_inputs(&config.input).map_err(|source| PipelineError::Discover {
        path: config.input.clone(),
        source,
    })?;
    let single_file = config.input.is_file();

    let mut report = BatchReport::default();
    for input in &inputs {
        let output = resolve_output_path(
            &config.input,
            input,
            single_file,
            config.output.as_deref(),
            &config.suffix,
        );
        let mut diag = Diagnostics::new();
        match convert_file(input, &output, config.overwrite, &mut diag) {
            Ok(FileOutcome::Converted { output }) => report.converted.push(output),
            Ok(FileOutcome::SkippedExisting { .. }) => report.skipped += 1,
            Err(err) => {
                let message = err.to_string();
                diag.warn(message.clone());
                report.failures.push(message);
            }
        }
        report.warning_count += diag.len();
    }

    tracing::info!(
        "[{TOOL_TAG}] Converted {} file(s), skipped {}, failed {}",
        report.converted.len(),
        report.skipped,
        report.failed()
    );
    Ok(report)
}
