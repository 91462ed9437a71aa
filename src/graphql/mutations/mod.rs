use async_graphql::*;

use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::nullable::NullOnError;
use crate::graphql::types::{CreateUserInput, SubscriptionUserInput, UpdateUserInput, User};

pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a new user
    async fn create_user(&self, ctx: &Context<'_>, data: CreateUserInput) -> Option<User> {
        create_user(ctx, data).await.null_on_error(ctx)
    }

    /// Update an existing user; omitted fields keep their value
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: Option<UpdateUserInput>,
    ) -> Option<User> {
        update_user(ctx, &id.0, data.unwrap_or_default())
            .await
            .null_on_error(ctx)
    }

    /// Subscribe user `id` to user `userId`; returns the subscriber
    async fn subscribe_to(&self, ctx: &Context<'_>, data: SubscriptionUserInput) -> Option<User> {
        subscribe_to(ctx, data).await.null_on_error(ctx)
    }

    /// Unsubscribe user `id` from user `userId`; returns the subscriber
    async fn unsubscribe_from(
        &self,
        ctx: &Context<'_>,
        data: SubscriptionUserInput,
    ) -> Option<User> {
        unsubscribe_from(ctx, data).await.null_on_error(ctx)
    }
}

async fn create_user(ctx: &Context<'_>, data: CreateUserInput) -> Result<Option<User>> {
    let context = ctx.data::<GraphQLContext>()?;
    let user = context
        .user_service
        .create_user(data.into())
        .await
        .map_err(|e| e.to_graphql_error())?;

    Ok(Some(User::from(user)))
}

async fn update_user(ctx: &Context<'_>, id: &str, data: UpdateUserInput) -> Result<Option<User>> {
    let context = ctx.data::<GraphQLContext>()?;
    let user = context
        .user_service
        .update_user(id, data.into())
        .await
        .map_err(|e| e.to_graphql_error())?;

    Ok(Some(User::from(user)))
}

async fn subscribe_to(ctx: &Context<'_>, data: SubscriptionUserInput) -> Result<Option<User>> {
    let context = ctx.data::<GraphQLContext>()?;
    let user = context
        .user_service
        .subscribe_to(&data.id.0, &data.user_id.0)
        .await
        .map_err(|e| e.to_graphql_error())?;

    Ok(Some(User::from(user)))
}

async fn unsubscribe_from(ctx: &Context<'_>, data: SubscriptionUserInput) -> Result<Option<User>> {
    let context = ctx.data::<GraphQLContext>()?;
    let user = context
        .user_service
        .unsubscribe_from(&data.id.0, &data.user_id.0)
        .await
        .map_err(|e| e.to_graphql_error())?;

    Ok(Some(User::from(user)))
}
