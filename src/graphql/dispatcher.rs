use async_graphql::{Request, Response};
use tracing::debug;

use crate::graphql::context::GraphQLContext;
use crate::graphql::schema::GraphQLSchema;

/// Executes documents against the shared schema with a per-request context.
///
/// The returned `Response` serializes to the `{ data, errors }` envelope. Field
/// failures leave `data` in place with a null at the failing field; a document
/// that does not parse or validate yields `data: null`.
#[derive(Clone)]
pub struct QueryDispatcher {
    schema: GraphQLSchema,
    context: GraphQLContext,
}

impl QueryDispatcher {
    pub fn new(schema: GraphQLSchema, context: GraphQLContext) -> Self {
        Self { schema, context }
    }

    pub async fn dispatch(&self, request: Request) -> Response {
        let request = request.data(self.context.clone());

        debug!("GraphQL request received");
        let response = self.schema.execute(request).await;
        if response.is_err() {
            debug!("GraphQL request completed with {} error(s)", response.errors.len());
        } else {
            debug!("GraphQL request completed");
        }

        response
    }
}
