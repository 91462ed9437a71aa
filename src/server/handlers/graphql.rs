use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql::{Request, Response};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
};

use crate::server::app::AppState;

pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<Request>,
) -> Json<Response> {
    Json(state.dispatcher.dispatch(request).await)
}

pub async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
