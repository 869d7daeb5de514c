use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// ── OutputFormat ───────────────────────────────────────────────────────────────

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented plain text.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Analyse traffic counter output files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "traffic-counter",
    about = "Analyse traffic counter output files",
    version
)]
pub struct Settings {
    /// Path to the traffic counter data file
    pub file: PathBuf,

    /// Number of busiest half hours to show
    #[arg(long, default_value_t = 3)]
    pub top: usize,

    /// Half-hour records per low-traffic window
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    pub window: u64,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Logging level
    #[arg(
        long,
        env = "TRAFFIC_COUNTER_LOG_LEVEL",
        default_value = "WARNING",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"]
    )]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply derived overrides.
    pub fn load() -> Self {
        Self::parse().resolve()
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map(Self::resolve)
    }

    /// Apply the `--debug` flag.
    fn resolve(mut self) -> Self {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }
        self
    }

    /// Window length as a `usize` for the analysis functions.
    pub fn window_size(&self) -> usize {
        usize::try_from(self.window).unwrap_or(usize::MAX)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
