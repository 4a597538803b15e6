// src/utils/error.rs
use thiserror::Error;

// Extraction itself never fails; these cover setup, I/O and output.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid '{role}' selector '{selector}': {reason}")]
    InvalidSelector {
        role: String,
        selector: String,
        reason: String,
    },

    #[error("Invalid extractor configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction setup failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Output serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_convert_into_app_error() {
        let err: AppError = ExtractError::InvalidConfig("headingText must not be empty".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Extraction setup failed: Invalid extractor configuration: headingText must not be empty"
        );

        let err: AppError = StorageError::SerializationError("bad".to_string()).into();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
