use async_graphql::*;
use tracing::debug;

use crate::database::Filter;
use crate::errors::{ApiError, ToGraphQLError};
use crate::graphql::context::GraphQLContext;
use crate::graphql::nullable::NullOnError;
use crate::graphql::types::{MemberType, Post, Profile, User};

pub struct Query;

#[Object]
impl Query {
    /// Get all users
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        let users = context
            .store
            .users
            .find_many(None)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// Get a specific user by ID
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Option<User> {
        debug!("Looking up user {}", id.0);
        find_user(ctx, &id.0).await.null_on_error(ctx)
    }

    /// Get all profiles
    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let context = ctx.data::<GraphQLContext>()?;
        let profiles = context
            .store
            .profiles
            .find_many(None)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(profiles.into_iter().map(Profile::from).collect())
    }

    /// Get a specific profile by ID; null when it does not exist
    async fn profile(&self, ctx: &Context<'_>, id: ID) -> Option<Profile> {
        find_profile(ctx, &id.0).await.null_on_error(ctx)
    }

    /// Get all posts
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let context = ctx.data::<GraphQLContext>()?;
        let posts = context
            .store
            .posts
            .find_many(None)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// Get a specific post by ID
    async fn post(&self, ctx: &Context<'_>, id: ID) -> Option<Post> {
        find_post(ctx, &id.0).await.null_on_error(ctx)
    }

    /// Get all member types
    async fn member_types(&self, ctx: &Context<'_>) -> Result<Vec<MemberType>> {
        let context = ctx.data::<GraphQLContext>()?;
        let member_types = context
            .store
            .member_types
            .find_many(None)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(member_types.into_iter().map(MemberType::from).collect())
    }

    /// Get a specific member type by ID
    async fn member_type(&self, ctx: &Context<'_>, id: String) -> Option<MemberType> {
        find_member_type(ctx, &id).await.null_on_error(ctx)
    }
}

async fn find_user(ctx: &Context<'_>, id: &str) -> Result<Option<User>> {
    let context = ctx.data::<GraphQLContext>()?;
    let user = context
        .store
        .users
        .find_one(&Filter::equals("id", id))
        .await
        .map_err(|e| e.to_graphql_error())?
        .ok_or_else(|| ApiError::not_found("User", id).to_graphql_error())?;

    Ok(Some(User::from(user)))
}

async fn find_profile(ctx: &Context<'_>, id: &str) -> Result<Option<Profile>> {
    let context = ctx.data::<GraphQLContext>()?;
    let profile = context
        .store
        .profiles
        .find_one(&Filter::equals("id", id))
        .await
        .map_err(|e| e.to_graphql_error())?;

    Ok(profile.map(Profile::from))
}

async fn find_post(ctx: &Context<'_>, id: &str) -> Result<Option<Post>> {
    let context = ctx.data::<GraphQLContext>()?;
    let post = context
        .store
        .posts
        .find_one(&Filter::equals("id", id))
        .await
        .map_err(|e| e.to_graphql_error())?
        .ok_or_else(|| ApiError::not_found("Post", id).to_graphql_error())?;

    Ok(Some(Post::from(post)))
}

async fn find_member_type(ctx: &Context<'_>, id: &str) -> Result<Option<MemberType>> {
    let context = ctx.data::<GraphQLContext>()?;
    let member_type = context
        .store
        .member_types
        .find_one(&Filter::equals("id", id))
        .await
        .map_err(|e| e.to_graphql_error())?
        .ok_or_else(|| ApiError::not_found("MemberType", id).to_graphql_error())?;

    Ok(Some(MemberType::from(member_type)))
}
