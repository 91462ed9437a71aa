//! GraphQL conversion for domain errors
//!
//! # Examples
//!
//! ```rust
//! use usergraph::errors::{ApiError, ToGraphQLError};
//!
//! let err = ApiError::not_found("User", "42");
//! let graphql_err = err.to_graphql_error();
//! assert!(graphql_err.message.contains("42"));
//! ```

use async_graphql::{Error as GraphQLError, ErrorExtensions};

use super::*;

/// Convert domain errors to GraphQL errors with error codes
pub trait ToGraphQLError {
    /// Convert to GraphQL error with structured extensions
    fn to_graphql_error(&self) -> GraphQLError;
}

impl ToGraphQLError for ApiError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        let message = self.to_string();

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);

            match self {
                ApiError::NotFound { entity, id } => {
                    e.set("entity", *entity);
                    e.set("id", id.as_str());
                }
                ApiError::Validation { field, .. } => {
                    e.set("field", *field);
                }
                ApiError::Store(StoreError::RecordNotFound { entity, id }) => {
                    e.set("entity", *entity);
                    e.set("id", id.as_str());
                }
                _ => {}
            }
        })
    }
}

impl ToGraphQLError for StoreError {
    fn to_graphql_error(&self) -> GraphQLError {
        ApiError::from(self.clone()).to_graphql_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    fn extension_value<'a>(error: &'a GraphQLError, key: &str) -> Option<&'a Value> {
        error.extensions.as_ref().and_then(|ext| ext.get(key))
    }

    #[test]
    fn not_found_error_includes_fields() {
        let error = ApiError::not_found("MemberType", "gold").to_graphql_error();
        assert_eq!(
            extension_value(&error, "code"),
            Some(&Value::from("NOT_FOUND"))
        );
        assert_eq!(
            extension_value(&error, "entity"),
            Some(&Value::from("MemberType"))
        );
        assert_eq!(extension_value(&error, "id"), Some(&Value::from("gold")));
    }

    #[test]
    fn bad_request_maps_code() {
        let error = ApiError::bad_request("already subscribed").to_graphql_error();
        assert_eq!(
            extension_value(&error, "code"),
            Some(&Value::from("BAD_REQUEST"))
        );
    }

    #[test]
    fn validation_error_names_field() {
        let error = ApiError::validation("firstName", "must not be empty").to_graphql_error();
        assert_eq!(
            extension_value(&error, "code"),
            Some(&Value::from("BAD_REQUEST"))
        );
        assert_eq!(
            extension_value(&error, "field"),
            Some(&Value::from("firstName"))
        );
    }
}
