//! Shared types for the traffic counter.
//!
//! Holds the observation and window model, the error taxonomy, command-line
//! settings and timestamp formatting used by the data and binary crates.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{RecordError, Result, TrafficError};
pub use models::{DailyTotal, Observation, VehicleTotal, Window};
