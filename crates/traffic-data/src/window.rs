//! Lowest-traffic window search.
//!
//! Finds the run of `window_size` chronologically adjacent observations with
//! the smallest combined count using a running sum: each step drops the
//! record leaving the window and adds the one entering it, so the search is
//! O(n) after sorting.

use traffic_core::models::{Observation, VehicleTotal, Window};
use traffic_core::{Result, TrafficError};
use tracing::debug;

/// Find the contiguous run of `window_size` records with the minimum total.
///
/// Records are ordered by timestamp first (stable; the input slice is left
/// untouched). Adjacency is positional, so a window may straddle a gap in
/// the data. When several runs share the minimum, the earliest one wins.
///
/// # Errors
///
/// * [`TrafficError::InvalidWindowSize`] when `window_size` is zero.
/// * [`TrafficError::InsufficientRecords`] when there are fewer records than
///   `window_size`.
pub fn lowest_traffic_window(records: &[Observation], window_size: usize) -> Result<Window> {
    if window_size == 0 {
        return Err(TrafficError::InvalidWindowSize(window_size));
    }
    if records.len() < window_size {
        return Err(TrafficError::InsufficientRecords {
            needed: window_size,
            available: records.len(),
        });
    }

    let mut ordered = records.to_vec();
    ordered.sort_by_key(Observation::timestamp);

    let (best_start, min_total) = min_window_start(&ordered, window_size);
    debug!(
        "Lowest window of {} starts at index {} with total {}",
        window_size, best_start, min_total
    );

    Ok(Window::new(
        ordered[best_start],
        &ordered[best_start + 1..best_start + window_size],
    ))
}

/// Start index and sum of the first minimum-sum run in `ordered`.
///
/// Requires `1 <= window_size <= ordered.len()`.
fn min_window_start(ordered: &[Observation], window_size: usize) -> (usize, VehicleTotal) {
    let mut current: VehicleTotal = ordered[..window_size]
        .iter()
        .map(|r| VehicleTotal::from(r.count()))
        .sum();
    let mut min_total = current;
    let mut best_start = 0;

    for start in 1..=ordered.len() - window_size {
        current -= VehicleTotal::from(ordered[start - 1].count());
        current += VehicleTotal::from(ordered[start + window_size - 1].count());
        // Strict comparison keeps the earliest minimum.
        if current < min_total {
            min_total = current;
            best_start = start;
        }
    }

    (best_start, min_total)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
