use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use usergraph::config::ServerArgs;
use usergraph::database::{seed_data, Store};
use usergraph::server;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    setup_logging(args.level());

    let store = Store::shared();
    seed_data::seed_member_types(&store).await?;
    if args.seed {
        seed_data::create_example_data(&store).await?;
    }

    info!("Starting server on port {}", args.port);
    server::start_server(store, args.port, args.cors_origin.as_deref()).await?;

    Ok(())
}

fn setup_logging(log_level: Level) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.as_str().to_lowercase()))
        .without_time()
        .init();
}
