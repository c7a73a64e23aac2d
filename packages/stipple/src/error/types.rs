use thiserror::Error;

/// Errors raised by the stipple core
///
/// Rendering itself never fails on input content. Unsupported characters fall
/// back to the space glyph and overlong words are clipped, both silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StippleError {
    /// The glyph table does not match the fixed 5x7 geometry
    #[error("Configuration error: {0}")]
    Config(String),

    /// The year cannot be represented by the calendar
    #[error("Year out of range: {0}")]
    YearOutOfRange(i64),
}

/// Result type alias for stipple operations
pub type StippleResult<T> = Result<T, StippleError>;

/// Severity levels for categorizing error impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StippleErrorSeverity {
    /// Operation failed but the system can continue with other input
    Error,
    /// The system cannot be used until the cause is fixed
    Critical,
}

impl std::fmt::Display for StippleErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StippleErrorSeverity::Error => write!(f, "ERROR"),
            StippleErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl StippleError {
    /// Build a configuration error for a single glyph definition
    pub(crate) fn glyph(ch: char, details: impl std::fmt::Display) -> Self {
        StippleError::Config(format!("glyph {:?}: {}", ch, details))
    }

    /// Get the severity level of this error
    pub fn severity(&self) -> StippleErrorSeverity {
        match self {
            StippleError::Config(_) => StippleErrorSeverity::Critical,
            StippleError::YearOutOfRange(_) => StippleErrorSeverity::Error,
        }
    }

    /// Get error category as string
    pub fn category(&self) -> &'static str {
        match self {
            StippleError::Config(_) => "config",
            StippleError::YearOutOfRange(_) => "year_range",
        }
    }
}
