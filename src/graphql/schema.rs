use async_graphql::*;

use crate::graphql::mutations::Mutation;
use crate::graphql::queries::Query;

pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the schema once at startup. It holds no store: the context travels with each request.
pub fn build_schema() -> GraphQLSchema {
    Schema::build(Query, Mutation, EmptySubscription).finish()
}
