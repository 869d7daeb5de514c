//! Volume totals over a collection of observations.

use std::collections::BTreeMap;

use traffic_core::models::{DailyTotal, Observation, VehicleTotal};

// ── Public API ────────────────────────────────────────────────────────────────

/// Sum of every observation's count. `0` for an empty collection.
pub fn total_cars<'a, I>(records: I) -> VehicleTotal
where
    I: IntoIterator<Item = &'a Observation>,
{
    records
        .into_iter()
        .map(|record| VehicleTotal::from(record.count()))
        .sum()
}

/// Per-day totals, sorted by date (ascending).
///
/// Only days with at least one observation appear, each exactly once.
pub fn daily_totals<'a, I>(records: I) -> Vec<DailyTotal>
where
    I: IntoIterator<Item = &'a Observation>,
{
    aggregate_by_period(records, Observation::date)
        .into_iter()
        .map(|(date, (total, observations))| DailyTotal {
            date,
            total,
            observations,
        })
        .collect()
}

// ── Private ───────────────────────────────────────────────────────────────────

/// Generic grouping driver; `key_fn` maps an observation to its period key.
///
/// Returns `(sum, number of observations)` per key, ordered by key.
fn aggregate_by_period<'a, I, K>(
    records: I,
    key_fn: impl Fn(&Observation) -> K,
) -> BTreeMap<K, (VehicleTotal, usize)>
where
    I: IntoIterator<Item = &'a Observation>,
    K: Ord,
{
    let mut map: BTreeMap<K, (VehicleTotal, usize)> = BTreeMap::new();
    for record in records {
        let slot = map.entry(key_fn(record)).or_default();
        slot.0 += VehicleTotal::from(record.count());
        slot.1 += 1;
    }
    map
}

// ── Tests ─────────────────────────────────────────────────────────────────────
