//! Main analysis pipeline for the traffic counter.
//!
//! Loads a file, runs the aggregator, the busiest-interval ranking and the
//! lowest-window search, and returns a [`TrafficReport`] ready for output.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use traffic_core::models::{DailyTotal, Observation, VehicleTotal, Window};
use traffic_core::{Result, TrafficError};
use tracing::info;

use crate::aggregator::{daily_totals, total_cars};
use crate::ranking::top_n_half_hours;
use crate::reader::load_records;
use crate::window::lowest_traffic_window;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisMetadata {
    /// File the records were loaded from, if any.
    pub source: Option<PathBuf>,
    /// Number of observations analysed.
    pub records_analyzed: usize,
    /// Number of distinct calendar days.
    pub days_covered: usize,
    /// Earliest and latest interval start.
    pub first_timestamp: Option<NaiveDateTime>,
    pub last_timestamp: Option<NaiveDateTime>,
    /// Requested number of busiest intervals.
    pub top_requested: usize,
    /// Requested low-traffic window length.
    pub window_size: usize,
}

/// The complete output of [`analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficReport {
    /// Vehicles across all intervals.
    pub total: VehicleTotal,
    /// Per-day totals, ascending by date.
    pub daily: Vec<DailyTotal>,
    /// Busiest intervals, busiest first.
    pub busiest: Vec<Observation>,
    /// `None` when there are fewer records than the window length.
    pub lowest_window: Option<Window>,
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Load `path` and analyse it.
///
/// Load failures propagate unchanged; see [`analyze`] for the rest.
pub fn analyze_file(path: impl AsRef<Path>, top: usize, window_size: usize) -> Result<TrafficReport> {
    let path = path.as_ref();
    let records = load_records(path)?;
    info!("Loaded {} records from {}", records.len(), path.display());

    let mut report = analyze(&records, top, window_size)?;
    report.metadata.source = Some(path.to_path_buf());
    Ok(report)
}

/// Analyse an in-memory collection.
///
/// A window that cannot be formed because the collection is too short is
/// reported as `lowest_window: None`. Any other error propagates.
pub fn analyze(records: &[Observation], top: usize, window_size: usize) -> Result<TrafficReport> {
    let total = total_cars(records);
    let daily = daily_totals(records);
    let busiest = top_n_half_hours(records, top);

    let lowest_window = match lowest_traffic_window(records, window_size) {
        Ok(window) => Some(window),
        Err(TrafficError::InsufficientRecords { needed, available }) => {
            info!(
                "No low-traffic window: need {} records, have {}",
                needed, available
            );
            None
        }
        Err(e) => return Err(e),
    };

    let metadata = AnalysisMetadata {
        source: None,
        records_analyzed: records.len(),
        days_covered: daily.len(),
        first_timestamp: records.iter().map(Observation::timestamp).min(),
        last_timestamp: records.iter().map(Observation::timestamp).max(),
        top_requested: top,
        window_size,
    };

    Ok(TrafficReport {
        total,
        daily,
        busiest,
        lowest_window,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
