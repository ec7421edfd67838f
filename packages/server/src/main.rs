use std::sync::Arc;

use common::id::UuidGenerator;
use common::store::FilesystemDocumentStore;
use tracing::{Level, info};

use server::build_router;
use server::config::AppConfig;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;
    let store = FilesystemDocumentStore::new(config.store.data_dir.clone()).await?;
    info!(data_dir = %store.base_path().display(), "Using filesystem document store");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config,
        store: Arc::new(store),
        ids: Arc::new(UuidGenerator),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);
    info!("API docs at http://{}/swagger-ui", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
