//! Error types for payload decoding.

/// Errors produced while decoding a bridge payload.
#[derive(Debug)]
pub enum DecodeError {
    /// A required positional argument was missing.
    MissingArgument(usize),
    /// An argument that should carry JSON-stringified text had another shape.
    NotText(usize),
    /// The argument text was not valid JSON for the expected type.
    InvalidJson { argument: usize, message: String },
    /// A primitive argument failed to parse.
    InvalidPrimitive {
        argument: usize,
        expected: &'static str,
    },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument(index) => write!(f, "missing argument {index}"),
            Self::NotText(index) => write!(f, "argument {index} is not JSON-stringified text"),
            Self::InvalidJson { argument, message } => {
                write!(f, "argument {argument} is not valid JSON: {message}")
            }
            Self::InvalidPrimitive { argument, expected } => {
                write!(f, "argument {argument} is not a valid {expected}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for decode operations.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
