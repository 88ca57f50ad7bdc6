//! Error Types

use thiserror::Error;

/// Result type alias for landing operations
pub type Result<T> = std::result::Result<T, LandingError>;

/// Landing site error types
#[derive(Error, Debug)]
pub enum LandingError {
    /// Navigation target outside the active index domain
    #[error("Index {index} out of range (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LandingError {
    /// Whether the error comes from a rejected user input rather than a
    /// broken site setup
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_message() {
        let err = LandingError::IndexOutOfRange { index: 7, len: 2 };
        assert_eq!(err.to_string(), "Index 7 out of range (len: 2)");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_json_error_converts() {
        let err: LandingError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, LandingError::Json(_)));
        assert!(!err.is_input_error());
    }
}
