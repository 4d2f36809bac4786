//! Main entry point for the Eris site server.

use eris_catalog::Catalog;
use eris_config::{ConfigCache, ConfigLoader};
use eris_site::{router, AppState, SiteResult};
use std::env;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> SiteResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eris_site=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Eris site");

    let config = ConfigLoader::load();
    let state = AppState::new(ConfigCache::new(config), Catalog::builtin().clone());
    info!(commands = state.catalog.len(), "command catalog loaded");

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
