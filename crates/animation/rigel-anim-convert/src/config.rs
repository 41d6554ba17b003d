//! Run configuration for the batch converter.

use std::path::PathBuf;

/// File-name suffix that marks a Cosmic Reach animation source.
pub const SOURCE_SUFFIX: &str = ".animation.json";

/// Suffix given to converted files when none is configured.
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".rigel.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Single source file, or a directory searched recursively for sources.
    pub input: PathBuf,
    /// Explicit output file (single-file input with an extension) or output root.
    pub output: Option<PathBuf>,
    /// Replaces `.animation.json` in derived output names.
    pub suffix: String,
    /// Replace outputs that already exist instead of skipping them.
    pub overwrite: bool,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            overwrite: false,
        }
    }
}
