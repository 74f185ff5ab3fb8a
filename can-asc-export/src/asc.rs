//! ASC trace encoding
//!
//! Turns a stream of [`CanFrameRecord`]s into a Vector ASC plain-text trace:
//! a fixed three-line header followed by one line per frame. Timestamps are
//! re-based so the first frame of a session starts at zero; field layout
//! matches what CAN analysis tools expect from an ASC log.
//!
//! Output-file lifecycle is part of this module: the destination name is
//! derived deterministically from the source name, any leftover output from
//! a previous run of the same source is deleted before writing, and the
//! stream is closed on every exit path.

use crate::types::{CanFrameRecord, ExportError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the source stem to form the output file name
pub const OUTPUT_SUFFIX: &str = "_can.asc";

/// Compute the destination path for a source recording
///
/// Given a source file `N.<ext>` the destination is `N_can.asc`, placed in
/// `output_dir` when given, else in the working directory.
pub fn output_path(source: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            ExportError::SourceOpen(format!("Source has no usable file name: {:?}", source))
        })?;

    let file_name = format!("{}{}", stem, OUTPUT_SUFFIX);
    match output_dir {
        Some(dir) => Ok(dir.join(file_name)),
        None => Ok(PathBuf::from(file_name)),
    }
}

/// Delete leftover outputs for the same source stem
///
/// Reruns derive the same output name from the same source, so any file in
/// the destination directory whose name carries both the stem and the output
/// suffix is a stale artifact of a previous run and is removed.
fn remove_stale_outputs(dir: &Path, stem: &str) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.contains(stem) && name.contains(OUTPUT_SUFFIX) {
            log::debug!("Removing stale output: {:?}", entry.path());
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

/// An open ASC output session
///
/// Owns the destination stream for exactly one file write. The header is
/// emitted on creation; records are appended in the order given; the first
/// record's timestamp latches the session origin used to re-base all
/// subsequent timestamps. Dropping the session closes the stream on every
/// exit path; call [`finish`](AscWriter::finish) to flush and surface write
/// errors on the success path.
pub struct AscWriter {
    out: BufWriter<File>,
    origin: Option<f64>,
}

impl AscWriter {
    /// Create the output file and write the ASC header
    ///
    /// The destination is opened in truncate mode; any same-stem leftovers
    /// in the destination directory are deleted first. The header's date
    /// line carries the tool's wall clock, not the recording's.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(stem) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(OUTPUT_SUFFIX))
        {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            remove_stale_outputs(dir, stem)?;
        }

        let file = File::create(path)?;
        let mut out = BufWriter::new(file);

        let now = chrono::Local::now().format("%a %b %d %I:%M:%S%.6f %p %Y");
        writeln!(out, "date {}", now)?;
        writeln!(out, "base hex  timestamps absolute")?;
        writeln!(out, "internal events logged")?;

        Ok(Self { out, origin: None })
    }

    /// Append one record as one ASC line
    pub fn write_record(&mut self, record: &CanFrameRecord) -> Result<()> {
        let origin = *self.origin.get_or_insert(record.timestamp);
        // Records that sort before the session origin keep their raw
        // timestamp instead of going negative; the original tool behaved
        // this way and sorted inputs never hit it.
        let relative = if record.timestamp >= origin {
            record.timestamp - origin
        } else {
            record.timestamp
        };

        let line = render_line(relative, record);
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    /// Flush and close the session
    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Render one record as one ASC body line
fn render_line(relative: f64, record: &CanFrameRecord) -> String {
    if record.is_error_frame {
        // Error frames carry no identifier, direction, or data fields
        return format!("{:9.6} {}  ErrorFrame", relative, record.channel);
    }

    let mut id = format!("{:X}", record.can_id);
    if record.is_extended {
        id.push('x');
    }

    let (dtype, data) = if record.is_remote_frame {
        ("r".to_string(), String::new())
    } else {
        let bytes: Vec<String> = record
            .payload()
            .iter()
            .map(|byte| format!("{:02X}", byte))
            .collect();
        (format!("d {}", record.dlc), bytes.join(" "))
    };

    format!(
        "{:9.6} {}  {:<15} Rx   {} {}",
        relative, record.channel, id, dtype, data
    )
}

/// Encode a record stream into an ASC file
///
/// The sequence may be empty, which produces a header-only trace. A source
/// error mid-stream is propagated unchanged; the output stream is closed
/// before the error returns, leaving a partial file behind (no temp-file
/// rename is attempted).
pub fn encode<I>(records: I, output_path: &Path) -> Result<()>
where
    I: IntoIterator<Item = Result<CanFrameRecord>>,
{
    let mut writer = AscWriter::create(output_path)?;
    for record in records {
        writer.write_record(&record?)?;
    }
    writer.finish()
}
