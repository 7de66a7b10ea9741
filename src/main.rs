use std::sync::Arc;

use anyhow::Result;
use exercise_tracker::api::create_routes;
use exercise_tracker::config::{AppConfig, DatabaseConfig, StorageBackend};
use exercise_tracker::store::{MemoryStore, Store};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

async fn open_store(config: &AppConfig) -> Result<Arc<dyn Store>> {
    match config.storage {
        StorageBackend::Postgres => {
            let store = DatabaseConfig::from_env()?.connect_store().await?;
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            info!("Using in-memory store; data is lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let store = open_store(&config).await?;

    let app = create_routes(store, &config.static_dir);

    let listener = TcpListener::bind(config.server_address()).await?;
    info!("Your app is listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
