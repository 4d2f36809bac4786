//! Request handlers for the site's pages and data endpoints.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Json,
};
use eris_catalog::{
    category_style, format_arguments, format_permissions, ArgumentSummary, CategoryFilter,
    CategoryStyle, CommandRecord,
};
use eris_config::SiteConfig;
use serde::{Deserialize, Serialize};

/// Embedded landing page markup.
const LANDING_PAGE: &str = include_str!("../assets/index.html");

/// Query parameters for the command listing endpoint.
#[derive(Debug, Deserialize)]
pub struct CommandQuery {
    /// Free-text search term; empty means no text filtering.
    #[serde(default)]
    pub q: String,

    /// Selected category tab; `"all"` means no category filtering.
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "all".to_string()
}

/// One command card as rendered by the front-end.
#[derive(Debug, Serialize)]
pub struct CommandView {
    /// Display key, `"category:name"`.
    pub key: String,
    /// Command name.
    pub name: String,
    /// Category tag.
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Alternate invocation names.
    pub aliases: Vec<String>,
    /// Formatted argument summary and rows.
    pub arguments: ArgumentSummary,
    /// Formatted permission label, e.g. `"Manage Roles"` or `"None"`.
    pub permissions: String,
}

impl CommandView {
    fn from_record(record: &CommandRecord) -> Self {
        Self {
            key: record.display_key(),
            name: record.name.clone(),
            category: record.category.clone(),
            description: record.description.clone(),
            aliases: record.aliases.clone(),
            arguments: format_arguments(&record.required_args, &record.optional_args),
            permissions: format_permissions(&record.permissions),
        }
    }
}

/// Response body for the command listing endpoint.
#[derive(Debug, Serialize)]
pub struct CommandListResponse {
    /// Total number of commands in the catalog, independent of filtering.
    pub total: usize,
    /// Number of commands matching the current filters.
    pub count: usize,
    /// Matching commands, sorted by category then name.
    pub commands: Vec<CommandView>,
}

/// One category tab with its display metadata.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    /// Category tag.
    pub name: String,
    /// Number of commands in the category.
    pub count: usize,
    /// Icon, gradient, and description for the tab.
    pub style: CategoryStyle,
}

/// Response body for the category listing endpoint.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    /// Total number of commands in the catalog.
    pub total: usize,
    /// Categories in ascending lexicographic order.
    pub categories: Vec<CategoryView>,
}

/// Serves the static landing page.
pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Lists commands matching the search term and category selection.
///
/// An empty result set is a normal response, not an error.
pub async fn list_commands(
    State(state): State<AppState>,
    Query(query): Query<CommandQuery>,
) -> Json<CommandListResponse> {
    let filter = CategoryFilter::from_query(&query.category);
    let matches = state.catalog.filter_and_sort(&query.q, &filter);

    let commands: Vec<CommandView> = matches.iter().map(|r| CommandView::from_record(r)).collect();

    Json(CommandListResponse {
        total: state.catalog.len(),
        count: commands.len(),
        commands,
    })
}

/// Lists the category tabs with counts and display styles.
pub async fn list_categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    let categories = state
        .catalog
        .categories()
        .into_iter()
        .map(|name| {
            let count = state.catalog.category_count(&name);
            let style = category_style(&name);
            CategoryView { name, count, style }
        })
        .collect();

    Json(CategoryListResponse {
        total: state.catalog.len(),
        categories,
    })
}

/// Serves the active site configuration as `siteconfig.json`.
pub async fn site_config(State(state): State<AppState>) -> Json<SiteConfig> {
    Json((*state.config.get()).clone())
}

/// Redirects to the bot's support Discord server.
pub async fn discord_redirect(State(state): State<AppState>) -> Redirect {
    let invite = state.config.get().discord_server_invite.clone();
    Redirect::temporary(&invite)
}
