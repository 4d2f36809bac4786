//! Route table for the site.

use crate::handlers::{discord_redirect, index, list_categories, list_commands, site_config};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/commands", get(list_commands))
        .route("/api/categories", get(list_categories))
        .route("/siteconfig.json", get(site_config))
        .route("/discord", get(discord_redirect))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
