//! Recorded-source adapters
//!
//! This module contains the readers that turn a recorded log file into a
//! lazy, time-ordered stream of [`CanFrameRecord`]s. Each adapter implements
//! an iterator pattern over records and applies the caller's time window
//! while streaming; ascending timestamp order is a contract the adapters
//! provide and the encoder relies on without re-checking.

use crate::types::{CanFrameRecord, ExportError, Result, TimeWindow};
use std::path::Path;

pub mod blf;

// Re-export adapter types
pub use blf::BlfRecordStream;

/// Common trait for all recorded-source adapters
///
/// Each adapter opens a log file and yields records inside the given time
/// window, one forward pass, not restartable once consumed.
pub trait FrameSource: Iterator<Item = Result<CanFrameRecord>> + Sized {
    /// Open a recording and return an iterator over its CAN frame records
    fn open(path: &Path, window: TimeWindow) -> Result<Self>;
}

/// Open a recording, selecting the adapter from the file extension
///
/// Returns the boxed record stream the encoder consumes. Unrecognized
/// extensions are rejected before any file access.
pub fn open(
    path: &Path,
    window: TimeWindow,
) -> Result<Box<dyn Iterator<Item = Result<CanFrameRecord>>>> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some("blf") => {
            log::debug!("Detected BLF source format");
            let records = BlfRecordStream::open(path, window)?;
            Ok(Box::new(records))
        }
        _ => Err(ExportError::SourceFormat(format!(
            "Unsupported source format: {:?}",
            path
        ))),
    }
}
