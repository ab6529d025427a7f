//! Error types for the core library.

use thiserror::Error;

use crate::item::ValidationError;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more record fields failed validation.
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    #[test]
    fn test_validation_error_lists_every_field() {
        let err = Error::from(vec![
            ValidationError::EmptyName { id: ItemId::new(3) },
            ValidationError::MissingExpiryDate { id: ItemId::new(3) },
        ]);
        let text = err.to_string();
        assert!(text.contains("Item name is required"));
        assert!(text.contains("Expiry date is required"));
    }
}
