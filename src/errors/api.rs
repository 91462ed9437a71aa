//! Errors surfaced by resolvers and mutation services.
//!
//! # Examples
//!
//! ```rust
//! use usergraph::errors::ApiError;
//!
//! let err = ApiError::not_found("User", "42");
//! assert!(err.is_not_found());
//! assert_eq!(err.error_code(), "NOT_FOUND");
//! ```

use thiserror::Error;

use super::StoreError;

/// Resolver and mutation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Lookup by id found no record
    #[error("{entity} with id '{id}' not found")]
    NotFound {
        /// Entity type name
        entity: &'static str,
        /// Requested identifier
        id: String,
    },

    /// Mutation would violate an invariant
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Input field failed validation
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// Input field name
        field: &'static str,
        /// Reason
        message: String,
    },

    /// Data store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Check if this is a client error (400-series)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApiError::BadRequest(_) | ApiError::Validation { .. }
        )
    }

    /// Check if this is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound { .. } | ApiError::Store(StoreError::RecordNotFound { .. })
        )
    }

    /// Get error code for GraphQL/API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::BadRequest(_) | ApiError::Validation { .. } => "BAD_REQUEST",
            ApiError::Store(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ApiError::not_found("Post", "p-1");
        assert_eq!(err.to_string(), "Post with id 'p-1' not found");
        assert!(err.is_not_found());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_store_error_keeps_its_code() {
        let err: ApiError = StoreError::RecordNotFound {
            entity: "User",
            id: "u-1".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.is_not_found());

        let err: ApiError = StoreError::UnknownField {
            entity: "User",
            key: "nickname".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_client_errors() {
        assert!(ApiError::bad_request("already subscribed").is_client_error());
        assert!(ApiError::validation("email", "must not be empty").is_client_error());
    }

    #[test]
    fn test_validation_shares_bad_request_code() {
        let err = ApiError::validation("email", "must not be empty");
        assert_eq!(err.error_code(), "BAD_REQUEST");
        assert_eq!(err.error_code(), ApiError::bad_request("x").error_code());
    }
}
