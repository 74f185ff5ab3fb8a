//! Export configuration
//!
//! The options a caller hands to [`export_file`](crate::export_file): where
//! the generated `.asc` file goes and which time window of the recording to
//! convert. Everything else (output naming, stale-file cleanup) is derived.

use crate::types::TimeWindow;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for a single conversion run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Directory for the generated file; the working directory if unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Time window of the recording to convert (default: unbounded)
    #[serde(default)]
    pub window: TimeWindow,
}

impl ExportOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Builder method: set the earliest timestamp to convert, in seconds
    pub fn with_start(mut self, start: f64) -> Self {
        self.window.start = start;
        self
    }

    /// Builder method: set the latest timestamp to convert, in seconds
    pub fn with_end(mut self, end: f64) -> Self {
        self.window.end = end;
        self
    }

    /// Builder method: set the whole time window at once
    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }
}
