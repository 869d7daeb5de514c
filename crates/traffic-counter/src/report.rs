//! Rendering of a [`TrafficReport`] to an output stream.

use std::io::{self, Write};

use traffic_core::formatting::{format_date, format_timestamp};
use traffic_data::analysis::TrafficReport;

/// Line-oriented report: total, one line per day, the busiest intervals and
/// the quietest window.
pub fn write_text<W: Write>(out: &mut W, report: &TrafficReport) -> io::Result<()> {
    writeln!(out, "Total {}", report.total)?;
    for day in &report.daily {
        writeln!(out, "{} {}", format_date(&day.date), day.total)?;
    }

    writeln!(out, "Top half hours:")?;
    for record in &report.busiest {
        writeln!(out, "{}", record)?;
    }

    match &report.lowest_window {
        Some(window) => {
            writeln!(out, "Lowest traffic window:")?;
            writeln!(
                out,
                "Start {} Total {}",
                format_timestamp(&window.start()),
                window.total()
            )?;
            for record in window.records() {
                writeln!(out, "{}", record)?;
            }
        }
        None => writeln!(out, "No low-traffic window available")?,
    }

    Ok(())
}

/// The whole report as one pretty-printed JSON document.
pub fn write_json<W: Write>(out: &mut W, report: &TrafficReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
