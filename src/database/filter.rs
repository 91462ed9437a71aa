//! Filter shapes accepted by `Collection::find_many` and `Collection::find_one`.

use super::entities::{Entity, FieldKind, FieldValue};
use crate::errors::{StoreError, StoreResult};

/// Scalar a filter compares against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    Str(String),
    Int(i32),
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar::Str(value.clone())
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value)
    }
}

impl Scalar {
    fn matches(&self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Scalar::Str(expected), FieldValue::Str(actual)) => expected == actual,
            (Scalar::Int(expected), FieldValue::Int(actual)) => expected == actual,
            _ => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Field equals the value.
    Equals { key: String, equals: Scalar },
    /// Field equals any of the values.
    EqualsAnyOf {
        key: String,
        equals_any_of: Vec<Scalar>,
    },
    /// List field contains the value.
    InArray {
        key: String,
        in_array: Scalar,
    },
}

impl Filter {
    pub fn equals(key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Filter::Equals {
            key: key.into(),
            equals: value.into(),
        }
    }

    pub fn equals_any_of<I, V>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        Filter::EqualsAnyOf {
            key: key.into(),
            equals_any_of: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn in_array(key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Filter::InArray {
            key: key.into(),
            in_array: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Filter::Equals { key, .. }
            | Filter::EqualsAnyOf { key, .. }
            | Filter::InArray { key, .. } => key,
        }
    }

    /// Single id the filter pins down, if it is an `id` equality.
    pub(crate) fn exact_id(&self) -> Option<&str> {
        match self {
            Filter::Equals {
                key,
                equals: Scalar::Str(id),
            } if key == "id" => Some(id.as_str()),
            _ => None,
        }
    }

    /// Reject keys the entity does not declare, and `inArray` on non-list fields.
    pub fn validate<M: Entity>(&self) -> StoreResult<()> {
        let key = self.key();
        let kind = M::field_kind(key).ok_or_else(|| StoreError::UnknownField {
            entity: M::NAME,
            key: key.to_string(),
        })?;

        if matches!(self, Filter::InArray { .. }) && kind != FieldKind::IdentifierList {
            return Err(StoreError::NotAList {
                entity: M::NAME,
                key: key.to_string(),
            });
        }

        Ok(())
    }

    /// Assumes `validate` has passed for `M`.
    pub fn matches<M: Entity>(&self, record: &M) -> bool {
        let Some(value) = record.field(self.key()) else {
            return false;
        };

        match self {
            Filter::Equals { equals, .. } => equals.matches(&value),
            Filter::EqualsAnyOf { equals_any_of, .. } => {
                equals_any_of.iter().any(|candidate| candidate.matches(&value))
            }
            Filter::InArray { in_array, .. } => match (in_array, value) {
                (Scalar::Str(needle), FieldValue::List(items)) => {
                    items.iter().any(|item| item == needle)
                }
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entities::{posts, profiles, users};

    fn user(id: &str, subscribers: &[&str]) -> users::Model {
        users::Model {
            id: id.to_string(),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            email: format!("{}@example.com", id),
            subscribed_to_user_ids: subscribers.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn equals_matches_string_fields() {
        let record = user("u1", &[]);
        assert!(Filter::equals("id", "u1").matches(&record));
        assert!(!Filter::equals("id", "u2").matches(&record));
        assert!(Filter::equals("email", "u1@example.com").matches(&record));
    }

    #[test]
    fn equals_matches_integer_fields() {
        let profile = profiles::Model {
            id: "p1".to_string(),
            avatar: "a.png".to_string(),
            sex: "f".to_string(),
            birthday: 1990,
            country: "NL".to_string(),
            street: "Main".to_string(),
            city: "Utrecht".to_string(),
            member_type_id: "basic".to_string(),
            user_id: "u1".to_string(),
        };
        assert!(Filter::equals("birthday", 1990).matches(&profile));
        assert!(!Filter::equals("birthday", "1990").matches(&profile));
    }

    #[test]
    fn equals_any_of_matches_members() {
        let record = user("u2", &[]);
        assert!(Filter::equals_any_of("id", ["u1", "u2"]).matches(&record));
        assert!(!Filter::equals_any_of("id", ["u3"]).matches(&record));
        assert!(!Filter::equals_any_of("id", Vec::<String>::new()).matches(&record));
    }

    #[test]
    fn in_array_matches_list_membership() {
        let record = user("u1", &["u2", "u3"]);
        assert!(Filter::in_array("subscribedToUserIds", "u3").matches(&record));
        assert!(!Filter::in_array("subscribedToUserIds", "u1").matches(&record));
    }

    #[test]
    fn validate_rejects_unknown_keys() {
        let err = Filter::equals("nickname", "x")
            .validate::<users::Model>()
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::UnknownField {
                entity: "User",
                key: "nickname".to_string()
            }
        );
    }

    #[test]
    fn validate_rejects_in_array_on_scalar_field() {
        let err = Filter::in_array("userId", "u1")
            .validate::<posts::Model>()
            .unwrap_err();
        assert!(matches!(err, StoreError::NotAList { .. }));
    }
}
