//! Busiest-interval selection.

use std::cmp::Ordering;

use traffic_core::models::Observation;

/// Ranking order: higher count first, then earlier timestamp.
pub fn busiest_first(a: &Observation, b: &Observation) -> Ordering {
    b.count()
        .cmp(&a.count())
        .then_with(|| a.timestamp().cmp(&b.timestamp()))
}

/// The `n` observations with the largest counts, ranked by [`busiest_first`].
///
/// Returns everything (ranked) when `n` exceeds the number of records.
/// `n == 0` yields an empty vector rather than an error so that callers can
/// pass a user-supplied limit straight through. Records equal on both keys
/// keep their input order.
pub fn top_n_half_hours(records: &[Observation], n: usize) -> Vec<Observation> {
    if n == 0 || records.is_empty() {
        return Vec::new();
    }

    let mut ranked = records.to_vec();
    ranked.sort_by(busiest_first);
    ranked.truncate(n);
    ranked
}

// ── Tests ─────────────────────────────────────────────────────────────────────
