//! Main export API
//!
//! Ties the pieces together: open the recorded source, derive the
//! destination name, encode the stream. One call converts one recording;
//! callers converting several files invoke it once per file, each session
//! fully closed before the next begins.

use crate::config::ExportOptions;
use crate::types::Result;
use crate::{asc, source};
use std::path::{Path, PathBuf};

/// Convert one recorded log file into an ASC trace
///
/// Opens the source, streams its CAN frames through the encoder, and returns
/// the path of the generated file.
///
/// # Arguments
/// * `source_path` - Path to the recording (currently `.blf`)
/// * `options` - Output directory and time window
///
/// # Example
/// ```no_run
/// use can_asc_export::{export_file, ExportOptions};
/// use std::path::Path;
///
/// let options = ExportOptions::new().with_output_dir("traces");
/// let written = export_file(Path::new("run1.blf"), &options).unwrap();
/// println!("Wrote {:?}", written);
/// ```
pub fn export_file(source_path: &Path, options: &ExportOptions) -> Result<PathBuf> {
    log::info!("Converting recording: {:?}", source_path);

    let records = source::open(source_path, options.window)?;
    let destination = asc::output_path(source_path, options.output_dir.as_deref())?;

    asc::encode(records, &destination)?;

    log::info!("Wrote ASC trace: {:?}", destination);
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExportError;

    #[test]
    fn test_export_missing_source_fails() {
        let options = ExportOptions::new();
        let result = export_file(Path::new("nonexistent.blf"), &options);
        assert!(matches!(result, Err(ExportError::SourceOpen(_))));
    }

    #[test]
    fn test_export_unsupported_format_fails() {
        let options = ExportOptions::new();
        let result = export_file(Path::new("nonexistent.txt"), &options);
        assert!(matches!(result, Err(ExportError::SourceFormat(_))));
    }
}
