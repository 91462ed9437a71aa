//! Errors raised by the in-memory data store.

use thiserror::Error;

/// Data store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Filter or edit referenced a field the entity does not declare
    #[error("Unknown field '{key}' on {entity}")]
    UnknownField {
        /// Entity type name
        entity: &'static str,
        /// Offending field name
        key: String,
    },

    /// List operation on a field that is not a list of identifiers
    #[error("Field '{key}' on {entity} is not a list")]
    NotAList {
        /// Entity type name
        entity: &'static str,
        /// Offending field name
        key: String,
    },

    /// No record with the given id
    #[error("{entity} '{id}' does not exist")]
    RecordNotFound {
        /// Entity type name
        entity: &'static str,
        /// Missing identifier
        id: String,
    },

    /// Insert collided with an existing id
    #[error("{entity} '{id}' already exists")]
    DuplicateId {
        /// Entity type name
        entity: &'static str,
        /// Colliding identifier
        id: String,
    },
}

impl StoreError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::RecordNotFound { .. } => "NOT_FOUND",
            StoreError::DuplicateId { .. } => "CONFLICT",
            StoreError::UnknownField { .. } | StoreError::NotAList { .. } => "INTERNAL_ERROR",
        }
    }
}
