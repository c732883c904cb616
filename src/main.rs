use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use store_api::auth::JwtVerifier;
use store_api::config::{self, Environment};
use store_api::database::{self, MemoryStoreRepository, PgStoreRepository, StoreRepository};
use store_api::{app, AppState};

#[derive(Parser)]
#[command(name = "store-api")]
#[command(about = "Store CRUD and search HTTP API")]
#[command(version)]
struct Args {
    #[arg(long, help = "Address to bind (overrides STORE_API_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides STORE_API_PORT / PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Keep stores in process memory instead of PostgreSQL")]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = config::config();
    tracing::info!("Starting Store API in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        if config.environment == Environment::Production {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        tracing::warn!("JWT_SECRET is not set; every authenticated request will be rejected");
    }

    let stores: Arc<dyn StoreRepository> = if args.in_memory {
        tracing::info!("Using in-memory store repository");
        Arc::new(MemoryStoreRepository::new())
    } else {
        let pool = database::connect(&config.database)
            .await
            .context("failed to connect to the store database")?;
        Arc::new(PgStoreRepository::new(pool))
    };

    let verifier = JwtVerifier::new(&config.security.jwt_secret)
        .with_leeway(config.security.jwt_leeway_secs);
    let state = AppState::new(stores, Arc::new(verifier));

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Store API listening on http://{}", bind_addr);

    axum::serve(listener, app(state, config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Store API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
