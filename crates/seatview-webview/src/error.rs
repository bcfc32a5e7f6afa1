//! Error types for chart document assembly.

/// Errors that can occur while assembling or loading a chart document.
#[derive(Debug)]
pub enum ChartViewError {
    /// The configuration could not be encoded to JSON.
    ConfigEncoding(String),
}

impl std::fmt::Display for ChartViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigEncoding(msg) => write!(f, "configuration encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for ChartViewError {}

/// Result type for chart view operations.
pub type Result<T> = std::result::Result<T, ChartViewError>;
