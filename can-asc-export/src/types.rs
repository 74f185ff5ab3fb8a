//! Core types for the ASC export library
//!
//! This module defines the frame record the source adapters emit, the time
//! window used to bound a conversion, and the error type shared across the
//! library. Records are produced once by an adapter and consumed once by the
//! encoder; nothing here is mutated after construction.

use serde::{Deserialize, Serialize};

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Mask for the 29-bit extended arbitration identifier
pub const CAN_EFF_MASK: u32 = 0x1FFF_FFFF;

/// Maximum payload length of a classic CAN frame
pub const MAX_FRAME_DATA: usize = 8;

/// A single timestamped CAN frame as read from a recorded log
///
/// Exactly one of {error frame, remote frame, data frame} determines how the
/// record is rendered; classification precedence is error, then remote, then
/// data. Adapters clamp `dlc` to `min(dlc, data.len(), 8)` on construction so
/// consumers can index the payload without further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct CanFrameRecord {
    /// Timestamp in seconds, non-decreasing within a source
    pub timestamp: f64,
    /// CAN channel number (e.g., 0, 1, 2...)
    pub channel: u8,
    /// CAN arbitration ID, masked to 29 bits
    pub can_id: u32,
    /// True if this is an extended (29-bit) CAN ID
    pub is_extended: bool,
    /// True if this is a remote transmission request (no payload)
    pub is_remote_frame: bool,
    /// True if this is an error frame (no identifier or payload)
    pub is_error_frame: bool,
    /// Data length code, 0-8, meaningful only for data frames
    pub dlc: u8,
    /// Frame payload; only the first `dlc` bytes are meaningful
    pub data: Vec<u8>,
}

impl CanFrameRecord {
    /// The meaningful payload bytes of a data frame
    pub fn payload(&self) -> &[u8] {
        let len = usize::from(self.dlc).min(self.data.len());
        &self.data[..len]
    }
}

/// Inclusive time window bounding a conversion, in seconds
///
/// The default window is unbounded: from time zero to the maximum
/// representable time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Earliest timestamp admitted, inclusive
    pub start: f64,
    /// Latest timestamp admitted, inclusive
    pub end: f64,
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: f64::MAX,
        }
    }
}

impl TimeWindow {
    /// Create a window from optional integer-second bounds
    pub fn from_bounds(start: Option<u64>, end: Option<u64>) -> Self {
        let default = Self::default();
        Self {
            start: start.map_or(default.start, |s| s as f64),
            end: end.map_or(default.end, |e| e as f64),
        }
    }

    /// Check whether a timestamp falls inside the window
    pub fn contains(&self, timestamp: f64) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

/// Errors that can occur during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to open source: {0}")]
    SourceOpen(String),

    #[error("Malformed source: {0}")]
    SourceFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_clamped_by_dlc() {
        let record = CanFrameRecord {
            timestamp: 0.0,
            channel: 1,
            can_id: 0x123,
            is_extended: false,
            is_remote_frame: false,
            is_error_frame: false,
            dlc: 2,
            data: vec![0x0A, 0xFF, 0x55],
        };
        assert_eq!(record.payload(), &[0x0A, 0xFF]);
    }

    #[test]
    fn test_payload_clamped_by_data_len() {
        let record = CanFrameRecord {
            timestamp: 0.0,
            channel: 1,
            can_id: 0x123,
            is_extended: false,
            is_remote_frame: false,
            is_error_frame: false,
            dlc: 8,
            data: vec![0x01, 0x02],
        };
        assert_eq!(record.payload(), &[0x01, 0x02]);
    }

    #[test]
    fn test_time_window_default_is_unbounded() {
        let window = TimeWindow::default();
        assert!(window.contains(0.0));
        assert!(window.contains(1.0e18));
    }

    #[test]
    fn test_time_window_bounds_inclusive() {
        let window = TimeWindow::from_bounds(Some(10), Some(20));
        assert!(!window.contains(9.999));
        assert!(window.contains(10.0));
        assert!(window.contains(20.0));
        assert!(!window.contains(20.001));
    }
}
