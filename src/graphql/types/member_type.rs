use async_graphql::*;

use crate::database::entities::member_types;

#[derive(SimpleObject, Clone, Debug)]
pub struct MemberType {
    pub id: String,
    pub discount: i32,
    pub month_posts_limit: i32,
}

impl From<member_types::Model> for MemberType {
    fn from(model: member_types::Model) -> Self {
        Self {
            id: model.id,
            discount: model.discount,
            month_posts_limit: model.month_posts_limit,
        }
    }
}
