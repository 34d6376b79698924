use std::sync::Arc;

use roomsched::config::AppConfig;
use roomsched::db::RoomDbManager;
use roomsched::scheduling::ScheduleCatalog;
use roomsched::server::create_router;
use roomsched::types::RoomState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading schedule catalog from {}", path.display());
            ScheduleCatalog::load_from_file(path).map_err(|e| {
                if e.is_content_error() {
                    anyhow::anyhow!("catalog {} is not usable: {}", path.display(), e)
                } else {
                    anyhow::anyhow!("failed to read catalog {}: {}", path.display(), e)
                }
            })?
        }
        None => ScheduleCatalog::standard(),
    };
    info!(
        "Catalog has {} time slots across {} days",
        catalog.time_slots().len(),
        catalog.days().len()
    );

    let room_db = RoomDbManager::new(&config.db_path)?;
    info!("Opened room database at {}", config.db_path);

    let state = Arc::new(RoomState {
        catalog,
        room_db,
        conflict_policy: config.conflict_policy,
    });

    let listener =
        tokio::net::TcpListener::bind((config.address.as_str(), config.port)).await?;
    info!(
        "Listening on {} (conflict policy: {:?})",
        listener.local_addr()?,
        config.conflict_policy
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl+C, shutting down");
    }
}
