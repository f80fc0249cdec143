//! ReelRecs web server.
//!
//! Loads the model artifacts, wires the TMDB lookup and serves the
//! recommendation page.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use data_loader::Catalog;
use server::{create_router, AppState, Config, Recommender};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("info,server=debug,tmdb_client=debug,data_loader=debug")
            }),
        )
        .init();

    info!("Starting ReelRecs server");

    let config = Config::from_env()?;

    info!("Loading catalog from {}...", config.model_dir.display());
    let model_dir = config.model_dir.clone();
    let catalog = tokio::task::spawn_blocking(move || Catalog::load_from_dir(&model_dir))
        .await
        .context("Catalog loading task panicked")?
        .with_context(|| format!("Failed to load catalog from {}", config.model_dir.display()))?;
    info!("Catalog loaded: {} movies", catalog.len());

    let recommender = Recommender::from_config(Arc::new(catalog), &config)?;
    let app = create_router(AppState::new(recommender));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
