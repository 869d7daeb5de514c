//! Line-level validation for traffic counter files.
//!
//! Every non-blank input line must look like `<timestamp> <count>`, e.g.
//! `2021-12-01T05:00:00 5`.

use traffic_core::formatting::parse_timestamp;
use traffic_core::models::Observation;
use traffic_core::RecordError;

/// Parse one raw line into an [`Observation`].
///
/// Surrounding whitespace is ignored. The line must hold exactly two
/// whitespace-separated fields; the count must be a non-negative base-10
/// integer.
pub fn parse_record_line(line: &str) -> Result<Observation, RecordError> {
    let stripped = line.trim();
    if stripped.is_empty() {
        return Err(RecordError::EmptyLine);
    }

    let fields: Vec<&str> = stripped.split_whitespace().collect();
    let [timestamp_text, count_text] = fields.as_slice() else {
        return Err(RecordError::field_count(fields.len(), stripped));
    };

    let timestamp = parse_timestamp(timestamp_text)
        .ok_or_else(|| RecordError::Timestamp(timestamp_text.to_string()))?;

    let count = parse_count(count_text)?;

    Ok(Observation::new(timestamp, count))
}

/// Signed parse first so that `-3` is reported as negative, not as garbage.
fn parse_count(text: &str) -> Result<u64, RecordError> {
    match text.parse::<i128>() {
        Ok(value) if value < 0 => Err(RecordError::NegativeCount(text.to_string())),
        Ok(value) => u64::try_from(value).map_err(|_| RecordError::Count(text.to_string())),
        Err(_) => Err(RecordError::Count(text.to_string())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
