use serde::{Deserialize, Serialize};

use super::{Entity, FieldKind, FieldValue};

pub const FIELDS: &[(&str, FieldKind)] = &[
    ("id", FieldKind::Identifier),
    ("title", FieldKind::String),
    ("content", FieldKind::String),
    ("userId", FieldKind::Identifier),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub title: String,
    pub content: String,
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModel {
    pub title: String,
    pub content: String,
    pub user_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeModel {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Entity for Model {
    const NAME: &'static str = "Post";
    const FIELDS: &'static [(&'static str, FieldKind)] = FIELDS;

    type Create = CreateModel;
    type Change = ChangeModel;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, data: CreateModel) -> Self {
        Self {
            id,
            title: data.title,
            content: data.content,
            user_id: data.user_id,
        }
    }

    fn apply_change(&mut self, change: ChangeModel) {
        if let Some(title) = change.title {
            self.title = title;
        }
        if let Some(content) = change.content {
            self.content = content;
        }
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Str(&self.id)),
            "title" => Some(FieldValue::Str(&self.title)),
            "content" => Some(FieldValue::Str(&self.content)),
            "userId" => Some(FieldValue::Str(&self.user_id)),
            _ => None,
        }
    }
}
