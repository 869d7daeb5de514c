//! Data ingestion and analysis for the traffic counter.
//!
//! Responsible for parsing and loading half-hourly count files, aggregating
//! totals, ranking the busiest intervals, finding the quietest window and
//! running the top-level analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod parser;
pub mod ranking;
pub mod reader;
pub mod window;

#[cfg(test)]
mod test_support;

pub use traffic_core as core;
