use thiserror::Error;

/// heatcal error types
#[derive(Error, Debug)]
pub enum HeatcalError {
    /// Failed to parse a data file or a date string
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Grid must have at least one week
    #[error("invalid week count: {0} (must be at least 1)")]
    InvalidWeeks(usize),

    /// Grid reaches past the supported calendar
    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for heatcal
pub type Result<T> = std::result::Result<T, HeatcalError>;
