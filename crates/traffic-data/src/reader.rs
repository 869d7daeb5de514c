//! Traffic counter file loading.
//!
//! Reads `<timestamp> <count>` lines from a plain text file and converts them
//! into a chronologically ordered `Vec<Observation>`. Loading is strict: the
//! first malformed line aborts the whole load with its line number.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use traffic_core::models::Observation;
use traffic_core::{Result, TrafficError};
use tracing::debug;

use crate::parser::parse_record_line;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every observation in the file at `path`, sorted by timestamp.
///
/// Whitespace-only lines are skipped. Records sharing a timestamp keep the
/// order they had in the file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Observation>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TrafficError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(TrafficError::NotAFile(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| match source.kind() {
        // Removed between the existence check and the open.
        ErrorKind::NotFound => TrafficError::NotFound(path.to_path_buf()),
        _ => TrafficError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    read_records(BufReader::new(file), path)
}

/// Parse observations from any buffered reader.
///
/// `path` is only used to label errors. Applies the same rules as
/// [`load_records`] after the file has been opened.
pub fn read_records<R: BufRead>(mut reader: R, path: &Path) -> Result<Vec<Observation>> {
    let mut records: Vec<Observation> = Vec::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut line_number = 0usize;
    let mut blank_lines = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| TrafficError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let line = std::str::from_utf8(&buf).map_err(|_| TrafficError::Encoding {
            path: path.to_path_buf(),
            line: line_number,
        })?;

        if line.trim().is_empty() {
            blank_lines += 1;
            continue;
        }

        let record = parse_record_line(line).map_err(|source| TrafficError::Parse {
            line: line_number,
            source,
        })?;
        records.push(record);
    }

    debug!(
        "File {}: {} lines read, {} blank, {} records",
        path.display(),
        line_number,
        blank_lines,
        records.len(),
    );

    if records.is_empty() {
        return Err(TrafficError::NoRecords(path.to_path_buf()));
    }

    // `sort_by_key` is stable.
    records.sort_by_key(Observation::timestamp);
    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
