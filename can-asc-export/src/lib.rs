//! CAN ASC Export Library
//!
//! Converts recorded CAN bus traces into the plain-text ASC log format used
//! by CAN analysis tools.
//!
//! # Architecture
//!
//! Two components form a single pipeline:
//! - Source adapters parse a recording (currently Vector BLF) into a lazy,
//!   time-ordered stream of CAN frame records, bounded by a caller-supplied
//!   time window.
//! - The ASC encoder consumes the stream, re-bases timestamps against the
//!   first frame of the session, and writes a header plus one line per frame
//!   to the output file, replacing stale output from previous runs.
//!
//! The library does NOT:
//! - Re-encode into binary trace formats
//! - Capture live bus traffic
//! - Merge channels beyond what the source supplies
//! - Parse ASC back into frames
//!
//! # Example Usage
//!
//! ```no_run
//! use can_asc_export::{export_file, ExportOptions};
//! use std::path::Path;
//!
//! let options = ExportOptions::new()
//!     .with_output_dir("traces")
//!     .with_start(10.0)
//!     .with_end(60.0);
//!
//! let written = export_file(Path::new("run1.blf"), &options).unwrap();
//! println!("Wrote {:?}", written);
//! ```

// Public modules
pub mod asc;
pub mod config;
pub mod source;
pub mod types;

// Re-export main types for convenience
pub use asc::{encode, output_path, AscWriter, OUTPUT_SUFFIX};
pub use config::ExportOptions;
pub use export::export_file;
pub use source::FrameSource;
pub use types::{CanFrameRecord, ExportError, Result, TimeWindow};

// Internal modules (not exposed in public API)
mod export;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
