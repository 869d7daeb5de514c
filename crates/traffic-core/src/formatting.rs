use chrono::{NaiveDate, NaiveDateTime};

/// `strftime` pattern of a timestamp literal in the input file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `strftime` pattern used for per-day keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a timestamp in the same shape the input file uses.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use traffic_core::formatting::format_timestamp;
///
/// let ts = NaiveDate::from_ymd_opt(2021, 12, 1)
///     .unwrap()
///     .and_hms_opt(7, 30, 0)
///     .unwrap();
/// assert_eq!(format_timestamp(&ts), "2021-12-01T07:30:00");
/// ```
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Render a calendar date as `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use traffic_core::formatting::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2021, 12, 9).unwrap();
/// assert_eq!(format_date(&date), "2021-12-09");
/// ```
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a timestamp literal such as `2021-12-01T05:00:00`.
///
/// Returns `None` when the text is not exactly a date, a `T`, and a
/// to-the-second time, every field zero-padded.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    if !has_timestamp_shape(text) {
        return None;
    }
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).ok()
}

/// `YYYY-MM-DDTHH:MM:SS` by position. chrono alone accepts unpadded fields.
fn has_timestamp_shape(text: &str) -> bool {
    const SHAPE: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";
    let bytes = text.as_bytes();
    bytes.len() == SHAPE.len()
        && bytes.iter().zip(SHAPE).all(|(&b, &expected)| match expected {
            b'd' => b.is_ascii_digit(),
            sep => b == sep,
        })
}
