use async_graphql::*;

use crate::database::entities::{profiles, users};
use crate::database::Filter;
use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::nullable::NullOnError;
use crate::graphql::types::{MemberType, Post, Profile};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Users subscribed to this user
    pub subscribed_to_user_ids: Vec<ID>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: ID(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            subscribed_to_user_ids: model.subscribed_to_user_ids.into_iter().map(ID).collect(),
        }
    }
}

#[ComplexObject]
impl User {
    /// Posts written by this user
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let context = ctx.data::<GraphQLContext>()?;
        let posts = context
            .store
            .posts
            .find_many(Some(&Filter::equals("userId", &self.id.0)))
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// The user's profile, if one exists
    async fn profile(&self, ctx: &Context<'_>) -> Option<Profile> {
        user_profile(ctx, &self.id.0).await.null_on_error(ctx)
    }

    /// Member type of the user's profile; null without a profile or a matching member type
    async fn member_type(&self, ctx: &Context<'_>) -> Option<MemberType> {
        find_member_type(ctx, &self.id.0).await.null_on_error(ctx)
    }

    /// Users subscribed to this user
    async fn user_subscribed_to(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        let users = context
            .store
            .users
            .find_many(Some(&Filter::in_array("subscribedToUserIds", &self.id.0)))
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// Users listed in this user's subscribedToUserIds
    async fn subscribed_to_user(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        let users = context
            .store
            .users
            .find_many(Some(&Filter::equals_any_of(
                "id",
                self.subscribed_to_user_ids.iter().map(|id| &id.0),
            )))
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(users.into_iter().map(User::from).collect())
    }
}

async fn user_profile(ctx: &Context<'_>, user_id: &str) -> Result<Option<Profile>> {
    let context = ctx.data::<GraphQLContext>()?;
    let profile = find_profile(context, user_id).await?;

    Ok(profile.map(Profile::from))
}

async fn find_member_type(ctx: &Context<'_>, user_id: &str) -> Result<Option<MemberType>> {
    let context = ctx.data::<GraphQLContext>()?;
    let Some(profile) = find_profile(context, user_id).await? else {
        return Ok(None);
    };

    let member_type = context
        .store
        .member_types
        .find_one(&Filter::equals("id", profile.member_type_id))
        .await
        .map_err(|e| e.to_graphql_error())?;

    Ok(member_type.map(MemberType::from))
}

async fn find_profile(context: &GraphQLContext, user_id: &str) -> Result<Option<profiles::Model>> {
    context
        .store
        .profiles
        .find_one(&Filter::equals("userId", user_id))
        .await
        .map_err(|e| e.to_graphql_error())
}

#[derive(InputObject)]
pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<CreateUserInput> for users::CreateModel {
    fn from(input: CreateUserInput) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        }
    }
}

#[derive(InputObject, Default)]
pub struct UpdateUserInput {
    /// user name
    pub first_name: Option<String>,
    /// user surname
    pub last_name: Option<String>,
    /// user email
    pub email: Option<String>,
}

impl From<UpdateUserInput> for users::ChangeModel {
    fn from(input: UpdateUserInput) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        }
    }
}

/// `id` subscribes to (or unsubscribes from) `userId`
#[derive(InputObject)]
pub struct SubscriptionUserInput {
    pub id: ID,
    pub user_id: ID,
}
