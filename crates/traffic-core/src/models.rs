use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::formatting::{format_timestamp, TIMESTAMP_FORMAT};

/// Length of one counting interval.
pub const INTERVAL_MINUTES: i64 = 30;

/// Sum of vehicle counts.
///
/// Wide enough that adding `usize::MAX` counts of `u64::MAX` cannot overflow.
pub type VehicleTotal = u128;

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

/// One half-hour traffic sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Observation {
    /// Start of the interval (no timezone).
    #[serde(serialize_with = "serialize_timestamp")]
    timestamp: NaiveDateTime,
    /// Vehicles counted during the interval.
    count: u64,
}

impl Observation {
    pub fn new(timestamp: NaiveDateTime, count: u64) -> Self {
        Self { timestamp, count }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Calendar day the interval starts on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Natural end of the interval.
    pub fn end(&self) -> NaiveDateTime {
        self.timestamp + Duration::minutes(INTERVAL_MINUTES)
    }
}

impl fmt::Display for Observation {
    /// Same `<timestamp> <count>` layout as an input line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_timestamp(&self.timestamp), self.count)
    }
}

/// Vehicle total for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: VehicleTotal,
    /// Number of intervals that contributed to `total`.
    pub observations: usize,
}

/// A run of chronologically adjacent observations.
///
/// Adjacency is positional: two neighbouring records may be more than one
/// interval apart when the source has gaps. A `Window` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    #[serde(serialize_with = "serialize_timestamp")]
    start: NaiveDateTime,
    #[serde(serialize_with = "serialize_timestamp")]
    end: NaiveDateTime,
    total: VehicleTotal,
    records: Vec<Observation>,
}

impl Window {
    /// Build a window from its first record and the records that follow it.
    ///
    /// Taking `first` separately keeps a window from ever being empty.
    pub fn new(first: Observation, rest: &[Observation]) -> Self {
        let mut records = Vec::with_capacity(rest.len() + 1);
        records.push(first);
        records.extend_from_slice(rest);

        let end = records.last().map_or(first.end(), Observation::end);
        Self {
            start: first.timestamp(),
            end,
            total: records.iter().map(|r| VehicleTotal::from(r.count())).sum(),
            records,
        }
    }

    /// Timestamp of the first record.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Timestamp of the last record plus one interval.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Sum of the records' counts.
    pub fn total(&self) -> VehicleTotal {
        self.total
    }

    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; provided alongside [`Window::len`].
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
