pub mod app;
pub mod handlers;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::database::Store;

pub async fn start_server(store: Arc<Store>, port: u16, cors_origin: Option<&str>) -> Result<()> {
    let app = app::create_app(store, cors_origin).await?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /graphql                    - GraphQL API (POST) & Playground (GET)");
}
