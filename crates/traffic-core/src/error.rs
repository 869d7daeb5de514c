use std::path::PathBuf;
use thiserror::Error;

/// Longest prefix of a rejected line echoed back in a [`RecordError`].
pub const LINE_PREVIEW_CHARS: usize = 50;

/// Reasons a single input line cannot become an observation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The line held nothing but whitespace.
    #[error("Line is empty")]
    EmptyLine,

    /// The line did not split into a timestamp and a count.
    #[error("Expected exactly 2 fields (timestamp and count), got {found}: {line}")]
    FieldCount { found: usize, line: String },

    /// The first field is not a `YYYY-MM-DDTHH:MM:SS` literal.
    #[error("Invalid timestamp format: {0}")]
    Timestamp(String),

    /// The second field is not a base-10 integer.
    #[error("Count must be an integer, got: {0}")]
    Count(String),

    /// The count parsed but is below zero.
    #[error("Count must be non-negative, got: {0}")]
    NegativeCount(String),
}

impl RecordError {
    /// Build a [`RecordError::FieldCount`], clipping the echoed line.
    pub fn field_count(found: usize, line: &str) -> Self {
        RecordError::FieldCount {
            found,
            line: line.chars().take(LINE_PREVIEW_CHARS).collect(),
        }
    }
}

/// All errors produced while loading or analysing traffic data.
#[derive(Error, Debug)]
pub enum TrafficError {
    /// The input path does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input path exists but is a directory or other non-regular file.
    #[error("Path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The file could not be opened or read from disk.
    #[error("Failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the file is not valid UTF-8.
    #[error("File encoding error in {} at line {line}", .path.display())]
    Encoding { path: PathBuf, line: usize },

    /// A non-blank line failed validation.
    #[error("Parse error at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: RecordError,
    },

    /// The file held no observations at all.
    #[error("No valid records found in {}", .0.display())]
    NoRecords(PathBuf),

    /// A window must span at least one interval.
    #[error("window_size must be positive, got {0}")]
    InvalidWindowSize(usize),

    /// There are fewer observations than the requested window length.
    #[error("Not enough records to form a window: need {needed}, got {available}")]
    InsufficientRecords { needed: usize, available: usize },
}

impl TrafficError {
    /// `true` for the "input cannot be found or read" class of failures,
    /// as opposed to failures caused by the file's content.
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            TrafficError::NotFound(_)
                | TrafficError::NotAFile(_)
                | TrafficError::FileRead { .. }
                | TrafficError::Encoding { .. }
        )
    }
}

/// Convenience alias used throughout the traffic crates.
pub type Result<T> = std::result::Result<T, TrafficError>;
