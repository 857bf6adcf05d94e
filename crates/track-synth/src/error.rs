//! Error type shared by the generator, scheduler and TCX writer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("At least 2 waypoints are required, got {0}")]
    TooFewWaypoints(usize),
    #[error("Duration must be positive, got {0}s")]
    InvalidDuration(f64),
    #[error("Sample interval must be positive, got {0}s")]
    InvalidInterval(f64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Time format error: {0}")]
    TimeFormat(#[from] time::error::Format),
    #[error("Time parse error: {0}")]
    TimeParse(#[from] time::error::Parse),
    #[error("Time range error: {0}")]
    TimeRange(#[from] time::error::ComponentRange),
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
