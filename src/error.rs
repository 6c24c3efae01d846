//! Error types for the domain store.
//!
//! Every store failure is a normal, user-correctable outcome. Callers render
//! these as inline status messages; nothing here is fatal and no mutation is
//! applied when an error is returned.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by [`crate::store::DomainStore`] mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was missing or empty.
    #[error("validation failed: {message}")]
    Validation {
        /// What the caller needs to correct
        message: String,
    },

    /// A booking referenced an offer identifier that does not resolve.
    #[error("no such offer: {offer_id}")]
    NotFound {
        /// The identifier that failed to resolve
        offer_id: String,
    },
}

impl StoreError {
    /// Build a validation error from a display message.
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation {
            message: message.into(),
        }
    }

    /// Build a not-found error for an offer identifier.
    pub fn not_found(offer_id: impl Into<String>) -> Self {
        StoreError::NotFound {
            offer_id: offer_id.into(),
        }
    }

    /// User-facing message suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Validation { message } => message.clone(),
            StoreError::NotFound { .. } => "Offer not found.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = StoreError::validation("Please add a title and description");
        assert_eq!(
            err.to_string(),
            "validation failed: Please add a title and description"
        );
        assert_eq!(err.user_message(), "Please add a title and description");
    }

    #[test]
    fn test_not_found_display() {
        let err = StoreError::not_found("offer-99");
        assert_eq!(err.to_string(), "no such offer: offer-99");
        assert_eq!(err.user_message(), "Offer not found.");
    }

    #[test]
    fn test_variants_compare() {
        assert_eq!(
            StoreError::not_found("a"),
            StoreError::NotFound {
                offer_id: "a".to_string()
            }
        );
        assert_ne!(
            StoreError::validation("x"),
            StoreError::not_found("x")
        );
    }
}
