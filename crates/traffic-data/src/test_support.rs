//! Fixtures shared by the unit tests of this crate.

use std::io::Write;
use std::path::{Path, PathBuf};

use traffic_core::formatting::parse_timestamp;
use traffic_core::models::{Observation, Window};

/// 24 half-hour samples spanning 2021-12-01 to 2021-12-09.
pub(crate) const SAMPLE_DATA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../data/traffic_data_sample.txt"
));

pub(crate) fn obs(ts: &str, count: u64) -> Observation {
    Observation::new(parse_timestamp(ts).unwrap(), count)
}

/// Counts of a window's records, in order.
pub(crate) fn counts(window: &Window) -> Vec<u64> {
    window.records().iter().map(Observation::count).collect()
}

/// The sample file, parsed and sorted.
pub(crate) fn sample_records() -> Vec<Observation> {
    crate::reader::read_records(SAMPLE_DATA.as_bytes(), Path::new("sample.txt")).unwrap()
}

pub(crate) fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}
