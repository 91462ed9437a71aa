use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{graphql, health};
use crate::database::Store;
use crate::graphql::{build_schema, GraphQLContext, QueryDispatcher};

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<QueryDispatcher>,
}

pub async fn create_app(store: Arc<Store>, cors_origin: Option<&str>) -> Result<Router> {
    let dispatcher = QueryDispatcher::new(build_schema(), GraphQLContext::new(store));
    let state = AppState {
        dispatcher: Arc::new(dispatcher),
    };

    let cors = match cors_origin {
        Some(origin) if origin != "*" => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any),
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/graphql",
            get(graphql::graphql_playground).post(graphql::graphql_handler),
        )
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}
