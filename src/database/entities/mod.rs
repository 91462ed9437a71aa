//! Record definitions for the four entity collections.
//!
//! Each entity module exposes a `Model` (the stored record), a `CreateModel`
//! (payload for `Collection::create`), a `ChangeModel` (partial merge payload
//! for `Collection::change`) and a `FIELDS` table describing its scalar fields.

pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod users;

/// Primitive kind of a scalar field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FieldKind {
    String,
    Integer,
    Identifier,
    IdentifierList,
}

/// Borrowed view of a single field value on a record.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i32),
    List(&'a [String]),
}

/// Structural contract every stored record fulfils.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Type name used in errors and logs.
    const NAME: &'static str;

    /// Ordered scalar fields and their kinds.
    const FIELDS: &'static [(&'static str, FieldKind)];

    type Create: Send;
    type Change: Send;

    fn id(&self) -> &str;

    fn from_create(id: String, data: Self::Create) -> Self;

    fn apply_change(&mut self, change: Self::Change);

    /// Read a field by its external (camelCase) name.
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;

    /// Mutable access to an identifier-list field.
    fn list_field_mut(&mut self, _key: &str) -> Option<&mut Vec<String>> {
        None
    }

    fn field_kind(key: &str) -> Option<FieldKind> {
        Self::FIELDS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, kind)| *kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_tables_start_with_id() {
        assert_eq!(users::FIELDS[0], ("id", FieldKind::Identifier));
        assert_eq!(profiles::FIELDS[0], ("id", FieldKind::Identifier));
        assert_eq!(posts::FIELDS[0], ("id", FieldKind::Identifier));
        assert_eq!(member_types::FIELDS[0], ("id", FieldKind::String));
    }

    #[test]
    fn field_kind_lookup() {
        assert_eq!(
            users::Model::field_kind("subscribedToUserIds"),
            Some(FieldKind::IdentifierList)
        );
        assert_eq!(profiles::Model::field_kind("birthday"), Some(FieldKind::Integer));
        assert_eq!(posts::Model::field_kind("likes"), None);
    }

    #[test]
    fn every_declared_field_is_readable() {
        let user = users::Model::from_create(
            "u-1".to_string(),
            users::CreateModel {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            },
        );
        for (name, _) in users::FIELDS {
            assert!(user.field(name).is_some(), "missing field {}", name);
        }
    }
}
