mod advisor;
mod config;
mod dataset;
mod errors;
mod models;
mod report;
mod routes;
mod session;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::catalog::DomainCatalog;
use crate::advisor::skill_fit::KeywordSkillFitScorer;
use crate::config::Config;
use crate::dataset::Dataset;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Elix v{}", env!("CARGO_PKG_VERSION"));

    // Load (or seed) the student dataset
    let dataset_path = config.dataset_path.clone();
    let dataset = tokio::task::spawn_blocking(move || Dataset::load_or_seed(&dataset_path))
        .await?
        .with_context(|| format!("Failed to load dataset {}", config.dataset_path.display()))?;

    if dataset.is_empty() {
        warn!("Dataset is empty; every lookup will miss");
    }

    let catalog = DomainCatalog::default();
    info!(
        "Domain catalog: {}",
        catalog.domain_names().collect::<Vec<_>>().join(", ")
    );

    let state = AppState {
        dataset: Arc::new(dataset),
        catalog: Arc::new(catalog),
        sessions: SessionStore::new(),
        config: config.clone(),
        skill_fit_scorer: Arc::new(KeywordSkillFitScorer),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
