use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

pub mod api;
pub mod settings;
pub mod database;
pub mod quiz;
pub mod seed;
pub mod session;

use settings::Settings;
use database::DatabaseManager;

/// Serves the quiz API until the process is stopped. Expects `.env` to be
/// loaded already.
pub async fn run() -> Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;
    info!("SignLearn quiz service starting...");

    let db = DatabaseManager::new(&settings.database).await?;
    let app = api::router(Arc::new(db));

    let address = settings.server.address().context("Invalid server address")?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Server running on: {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
