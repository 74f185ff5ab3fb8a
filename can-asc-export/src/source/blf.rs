//! BLF (Binary Log Format) source adapter
//!
//! Reads Vector BLF recordings using the `ablf` crate and exposes them as a
//! time-windowed stream of [`CanFrameRecord`]s.
//!
//! ## Recognized object types
//! - Type 86 (CanMessage2): CAN 2.0 data and remote frames
//! - Type 73 (CanErrorFrameExt): CAN error frames
//! - Type 10 (LogContainer): automatically decompressed by ablf
//!
//! Every other object type carried by the file (application text, LIN,
//! FlexRay, diagnostics, ...) is not a CAN frame and is excluded from the
//! stream. The filter is a match over the parsed object variant, evaluated
//! per object before any record is built.

use crate::source::FrameSource;
use crate::types::{
    CanFrameRecord, ExportError, Result, TimeWindow, CAN_EFF_MASK, MAX_FRAME_DATA,
};
use ablf::{BlfFile, ObjectTypes};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const NS_PER_SEC: f64 = 1_000_000_000.0;

/// Iterator over CAN frame records from a BLF recording
pub struct BlfRecordStream {
    objects: ablf::ObjectIterator<BufReader<File>>,
    window: TimeWindow,
    skipped_types: HashSet<u32>,
    done: bool,
}

impl FrameSource for BlfRecordStream {
    /// Open a BLF recording and return an iterator over its CAN frames
    ///
    /// Opens the file and validates its structure. The returned iterator
    /// yields records whose timestamps fall inside `window`, in recording
    /// order.
    fn open(path: &Path, window: TimeWindow) -> Result<Self> {
        log::info!("Opening BLF recording: {:?}", path);

        if !path.exists() {
            return Err(ExportError::SourceOpen(format!(
                "BLF file not found: {:?}",
                path
            )));
        }

        // Open file with buffered reading
        let file = File::open(path)
            .map_err(|e| ExportError::SourceOpen(format!("Failed to open BLF file: {}", e)))?;

        let reader = BufReader::new(file);

        // Parse BLF file structure
        let blf = BlfFile::from_reader(reader)
            .map_err(|(e, _)| ExportError::SourceFormat(format!("Failed to parse BLF file: {}", e)))?;

        // Validate BLF file
        if !blf.is_valid() {
            return Err(ExportError::SourceFormat(
                "Invalid BLF file format".to_string(),
            ));
        }

        log::info!("BLF file opened successfully");

        Ok(BlfRecordStream {
            objects: blf.into_iter(),
            window,
            skipped_types: HashSet::new(),
            done: false,
        })
    }
}

impl Iterator for BlfRecordStream {
    type Item = Result<CanFrameRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let obj = self.objects.next()?;
            let record = match obj.data {
                ObjectTypes::CanMessage86(msg) => {
                    // CAN 2.0 data or remote frame (type 86)
                    let mut data = msg.data;
                    data.truncate(MAX_FRAME_DATA);
                    let dlc = msg.dlc.min(MAX_FRAME_DATA as u8).min(data.len() as u8);
                    CanFrameRecord {
                        timestamp: msg.header.timestamp_ns as f64 / NS_PER_SEC,
                        channel: msg.channel as u8,
                        can_id: msg.id & CAN_EFF_MASK,
                        is_extended: (msg.flags & 0x02) != 0, // Bit 1: Extended ID
                        is_remote_frame: (msg.flags & 0x04) != 0, // Bit 2: Remote frame
                        is_error_frame: false,
                        dlc,
                        data,
                    }
                }
                ObjectTypes::CanErrorExt73(err) => {
                    // CAN error frame (type 73); identifier and payload are
                    // carried but never rendered
                    CanFrameRecord {
                        timestamp: err.header.timestamp_ns as f64 / NS_PER_SEC,
                        channel: err.channel as u8,
                        can_id: err.id & CAN_EFF_MASK,
                        is_extended: false,
                        is_remote_frame: false,
                        is_error_frame: true,
                        dlc: 0,
                        data: Vec::new(),
                    }
                }
                _ => {
                    // Not a CAN frame object; excluded from the stream
                    let obj_type = obj.object_type;
                    if self.skipped_types.insert(obj_type) {
                        log::debug!("Skipping non-CAN BLF object type {}", obj_type);
                    }
                    continue;
                }
            };

            if record.timestamp < self.window.start {
                continue;
            }
            if record.timestamp > self.window.end {
                // Timestamps are ascending, nothing later can be in window
                self.done = true;
                return None;
            }
            return Some(Ok(record));
        }
    }
}
