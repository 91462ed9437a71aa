use async_graphql::*;

use crate::database::entities::posts;

#[derive(SimpleObject, Clone, Debug)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub content: String,
    pub user_id: ID,
}

impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Self {
            id: ID(model.id),
            title: model.title,
            content: model.content,
            user_id: ID(model.user_id),
        }
    }
}
