use serde::{Deserialize, Serialize};

use super::{Entity, FieldKind, FieldValue};

pub const FIELDS: &[(&str, FieldKind)] = &[
    ("id", FieldKind::Identifier),
    ("firstName", FieldKind::String),
    ("lastName", FieldKind::String),
    ("email", FieldKind::String),
    ("subscribedToUserIds", FieldKind::IdentifierList),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Users subscribed to this user. The list lives on the followed side.
    pub subscribed_to_user_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModel {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeModel {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl Entity for Model {
    const NAME: &'static str = "User";
    const FIELDS: &'static [(&'static str, FieldKind)] = FIELDS;

    type Create = CreateModel;
    type Change = ChangeModel;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, data: CreateModel) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            subscribed_to_user_ids: Vec::new(),
        }
    }

    fn apply_change(&mut self, change: ChangeModel) {
        if let Some(first_name) = change.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = change.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = change.email {
            self.email = email;
        }
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Str(&self.id)),
            "firstName" => Some(FieldValue::Str(&self.first_name)),
            "lastName" => Some(FieldValue::Str(&self.last_name)),
            "email" => Some(FieldValue::Str(&self.email)),
            "subscribedToUserIds" => Some(FieldValue::List(&self.subscribed_to_user_ids)),
            _ => None,
        }
    }

    fn list_field_mut(&mut self, key: &str) -> Option<&mut Vec<String>> {
        match key {
            "subscribedToUserIds" => Some(&mut self.subscribed_to_user_ids),
            _ => None,
        }
    }
}
