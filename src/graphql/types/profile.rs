use async_graphql::*;

use crate::database::entities::profiles;

#[derive(SimpleObject, Clone, Debug)]
pub struct Profile {
    pub id: ID,
    pub avatar: String,
    pub sex: String,
    pub birthday: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub member_type_id: String,
    pub user_id: ID,
}

impl From<profiles::Model> for Profile {
    fn from(model: profiles::Model) -> Self {
        Self {
            id: ID(model.id),
            avatar: model.avatar,
            sex: model.sex,
            birthday: model.birthday,
            country: model.country,
            street: model.street,
            city: model.city,
            member_type_id: model.member_type_id,
            user_id: ID(model.user_id),
        }
    }
}
