//! Side-channel for human-readable warnings about dropped input.
//!
//! The converter never fails on malformed data; instead every skipped unit is
//! reported here. Each warning is forwarded to `tracing` as it is recorded and
//! also retained so callers (and tests) can inspect what was dropped.

use std::fmt;

/// Fixed tag prefixed to every rendered warning.
pub const TOOL_TAG: &str = "convert_cr_animations";

/// A single diagnostic message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{TOOL_TAG}] {}", self.message)
    }
}

/// Ordered collector of warnings emitted during one conversion.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and forward it to the active `tracing` subscriber.
    pub fn warn(&mut self, message: impl Into<String>) {
        let warning = Warning::new(message);
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// True if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.warnings.iter().any(|w| w.message.contains(needle))
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
