//! Error types for the VideoDigest core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for VideoDigest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Comprehensiveness level outside the slider range.
    #[error("Invalid comprehensiveness level: {0} (expected 0, 1 or 2)")]
    InvalidLevel(u8),

    /// Model identifier outside the supported set.
    #[error("Unknown model: {0}")]
    UnknownModel(String),
}

impl CoreError {
    /// Create a new unknown model error.
    pub fn unknown_model(id: impl Into<String>) -> Self {
        Self::UnknownModel(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_error() {
        let err = CoreError::InvalidLevel(7);
        assert!(err.to_string().contains("Invalid comprehensiveness level"));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_unknown_model_error() {
        let err = CoreError::unknown_model("llama");
        assert_eq!(err.to_string(), "Unknown model: llama");
    }
}
