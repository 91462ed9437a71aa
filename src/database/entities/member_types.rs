use serde::{Deserialize, Serialize};

use super::{Entity, FieldKind, FieldValue};

pub const FIELDS: &[(&str, FieldKind)] = &[
    ("id", FieldKind::String),
    ("discount", FieldKind::Integer),
    ("monthPostsLimit", FieldKind::Integer),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub discount: i32,
    pub month_posts_limit: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModel {
    pub discount: i32,
    pub month_posts_limit: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeModel {
    pub discount: Option<i32>,
    pub month_posts_limit: Option<i32>,
}

impl Entity for Model {
    const NAME: &'static str = "MemberType";
    const FIELDS: &'static [(&'static str, FieldKind)] = FIELDS;

    type Create = CreateModel;
    type Change = ChangeModel;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, data: CreateModel) -> Self {
        Self {
            id,
            discount: data.discount,
            month_posts_limit: data.month_posts_limit,
        }
    }

    fn apply_change(&mut self, change: ChangeModel) {
        if let Some(discount) = change.discount {
            self.discount = discount;
        }
        if let Some(month_posts_limit) = change.month_posts_limit {
            self.month_posts_limit = month_posts_limit;
        }
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Str(&self.id)),
            "discount" => Some(FieldValue::Int(self.discount)),
            "monthPostsLimit" => Some(FieldValue::Int(self.month_posts_limit)),
            _ => None,
        }
    }
}
