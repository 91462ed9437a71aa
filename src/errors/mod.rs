//! Error types for the user graph service
//!
//! # Error Categories
//!
//! - **StoreError**: data store faults (unknown fields, missing records)
//! - **ApiError**: resolver and mutation failures (not found, bad request, validation)
//!
//! Both convert to GraphQL errors carrying an `extensions.code` through the
//! `ToGraphQLError` trait. Document parse failures never reach these types:
//! the GraphQL executor reports them before any resolver runs.

pub mod api;
pub mod common;
pub mod store;

pub use api::ApiError;
pub use common::ToGraphQLError;
pub use store::StoreError;

/// Result type alias for data store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for resolver and mutation operations
pub type ApiResult<T> = Result<T, ApiError>;
