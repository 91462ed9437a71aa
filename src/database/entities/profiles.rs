use serde::{Deserialize, Serialize};

use super::{Entity, FieldKind, FieldValue};

pub const FIELDS: &[(&str, FieldKind)] = &[
    ("id", FieldKind::Identifier),
    ("avatar", FieldKind::String),
    ("sex", FieldKind::String),
    ("birthday", FieldKind::Integer),
    ("country", FieldKind::String),
    ("street", FieldKind::String),
    ("city", FieldKind::String),
    ("memberTypeId", FieldKind::String),
    ("userId", FieldKind::Identifier),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub avatar: String,
    pub sex: String,
    pub birthday: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    /// May reference a member type that does not exist.
    pub member_type_id: String,
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModel {
    pub avatar: String,
    pub sex: String,
    pub birthday: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub member_type_id: String,
    pub user_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeModel {
    pub avatar: Option<String>,
    pub sex: Option<String>,
    pub birthday: Option<i32>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub member_type_id: Option<String>,
}

impl Entity for Model {
    const NAME: &'static str = "Profile";
    const FIELDS: &'static [(&'static str, FieldKind)] = FIELDS;

    type Create = CreateModel;
    type Change = ChangeModel;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, data: CreateModel) -> Self {
        Self {
            id,
            avatar: data.avatar,
            sex: data.sex,
            birthday: data.birthday,
            country: data.country,
            street: data.street,
            city: data.city,
            member_type_id: data.member_type_id,
            user_id: data.user_id,
        }
    }

    fn apply_change(&mut self, change: ChangeModel) {
        if let Some(avatar) = change.avatar {
            self.avatar = avatar;
        }
        if let Some(sex) = change.sex {
            self.sex = sex;
        }
        if let Some(birthday) = change.birthday {
            self.birthday = birthday;
        }
        if let Some(country) = change.country {
            self.country = country;
        }
        if let Some(street) = change.street {
            self.street = street;
        }
        if let Some(city) = change.city {
            self.city = city;
        }
        if let Some(member_type_id) = change.member_type_id {
            self.member_type_id = member_type_id;
        }
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Str(&self.id)),
            "avatar" => Some(FieldValue::Str(&self.avatar)),
            "sex" => Some(FieldValue::Str(&self.sex)),
            "birthday" => Some(FieldValue::Int(self.birthday)),
            "country" => Some(FieldValue::Str(&self.country)),
            "street" => Some(FieldValue::Str(&self.street)),
            "city" => Some(FieldValue::Str(&self.city)),
            "memberTypeId" => Some(FieldValue::Str(&self.member_type_id)),
            "userId" => Some(FieldValue::Str(&self.user_id)),
            _ => None,
        }
    }
}
