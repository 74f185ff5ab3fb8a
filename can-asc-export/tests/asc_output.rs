//! End-to-end checks of the generated ASC traces
//!
//! Exercises the public API the way the CLI does: build a record stream,
//! encode it into a temp directory, and assert on the file contents.

use can_asc_export::{encode, output_path, CanFrameRecord, ExportError, Result};
use std::path::Path;

fn frame(timestamp: f64, channel: u8, can_id: u32, data: &[u8]) -> CanFrameRecord {
    CanFrameRecord {
        timestamp,
        channel,
        can_id,
        is_extended: false,
        is_remote_frame: false,
        is_error_frame: false,
        dlc: data.len() as u8,
        data: data.to_vec(),
    }
}

fn encode_to_lines(records: Vec<Result<CanFrameRecord>>) -> Vec<String> {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("trace_can.asc");
    encode(records, &out).unwrap();
    std::fs::read_to_string(&out)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn header_is_three_fixed_lines() {
    let lines = encode_to_lines(Vec::new());
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("date "));
    assert_eq!(lines[1], "base hex  timestamps absolute");
    assert_eq!(lines[2], "internal events logged");
}

#[test]
fn one_body_line_per_record_in_order() {
    let records = vec![
        Ok(frame(10.0, 1, 0x100, &[0x01])),
        Ok(frame(10.1, 1, 0x200, &[0x02])),
        Ok(frame(10.2, 2, 0x300, &[0x03])),
    ];
    let lines = encode_to_lines(records);
    assert_eq!(lines.len(), 6);
    assert!(lines[3].contains("100"));
    assert!(lines[4].contains("200"));
    assert!(lines[5].contains("300"));
}

#[test]
fn first_body_line_starts_at_zero() {
    let lines = encode_to_lines(vec![Ok(frame(1234.5, 1, 0x100, &[]))]);
    assert!(lines[3].starts_with(" 0.000000 "));
}

#[test]
fn mixed_frame_kinds_render_their_own_shapes() {
    let mut remote = frame(5.0, 1, 0x123456, &[]);
    remote.is_extended = true;
    remote.is_remote_frame = true;

    let mut error = frame(5.5, 1, 0, &[]);
    error.is_error_frame = true;

    let records = vec![
        Ok(frame(5.0, 1, 0x7FF, &[0x0A, 0xFF])),
        Ok(remote),
        Ok(error),
    ];
    let lines = encode_to_lines(records);
    assert_eq!(lines[3], " 0.000000 1  7FF             Rx   d 2 0A FF");
    assert_eq!(lines[4], " 0.000000 1  123456x         Rx   r ");
    assert_eq!(lines[5], " 0.500000 1  ErrorFrame");
}

#[test]
fn rerun_leaves_exactly_one_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = output_path(Path::new("run7.blf"), Some(dir.path())).unwrap();

    encode(vec![Ok(frame(0.0, 1, 0x100, &[0x01]))], &out).unwrap();
    encode(vec![Ok(frame(0.0, 1, 0x200, &[0x02]))], &out).unwrap();

    let matches: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.contains("run7") && n.contains("_can.asc"))
        .collect();
    assert_eq!(matches, vec!["run7_can.asc".to_string()]);

    // The surviving file is the second run's
    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], " 0.000000 1  200             Rx   d 1 02");
}

#[test]
fn mid_stream_source_error_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bad_can.asc");

    let records: Vec<Result<CanFrameRecord>> = vec![
        Ok(frame(0.0, 1, 0x100, &[])),
        Err(ExportError::SourceFormat("truncated".into())),
        Ok(frame(0.1, 1, 0x200, &[])),
    ];
    let result = encode(records, &out);
    assert!(result.is_err());
    assert!(out.exists());
}
