//! Integration tests for the site router and handlers.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use eris_catalog::Catalog;
use eris_config::{ConfigCache, SiteConfig};
use eris_site::{router, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState::new(ConfigCache::default(), Catalog::builtin().clone())
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let response = router(state)
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn landing_page_is_served() {
    let response = router(test_state())
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn commands_endpoint_filters_by_search_term() {
    let (status, body) = get_json(test_state(), "/api/commands?q=ban").await;
    assert_eq!(status, StatusCode::OK);

    let commands = body["commands"].as_array().expect("commands array");
    assert!(!commands.is_empty());
    assert!(commands.iter().any(|c| c["name"] == "ban"));
    assert_eq!(body["count"], commands.len());
}

#[tokio::test]
async fn commands_endpoint_filters_by_category() {
    let (status, body) = get_json(test_state(), "/api/commands?category=fun").await;
    assert_eq!(status, StatusCode::OK);

    let commands = body["commands"].as_array().expect("commands array");
    assert!(!commands.is_empty());
    assert!(commands.iter().all(|c| c["category"] == "fun"));
}

#[tokio::test]
async fn commands_endpoint_defaults_to_all() {
    let (status, body) = get_json(test_state(), "/api/commands").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], body["total"]);
}

#[tokio::test]
async fn commands_carry_formatted_arguments_and_permissions() {
    let (_, body) = get_json(test_state(), "/api/commands?q=ban&category=moderation").await;

    let commands = body["commands"].as_array().expect("commands array");
    let ban = commands
        .iter()
        .find(|c| c["name"] == "ban")
        .expect("ban command present");

    assert_eq!(ban["arguments"]["summary"], "1 required, 1 optional");
    assert_eq!(ban["arguments"]["details"][0]["type"], "mention");
    assert_eq!(ban["permissions"], "Ban Members");
    assert_eq!(ban["key"], "moderation:ban");
}

#[tokio::test]
async fn over_narrow_filters_return_empty_200() {
    let (status, body) = get_json(test_state(), "/api/commands?q=zzz&category=fun").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert!(body["commands"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn categories_endpoint_lists_styles_and_counts() {
    let (status, body) = get_json(test_state(), "/api/categories").await;
    assert_eq!(status, StatusCode::OK);

    let categories = body["categories"].as_array().expect("categories array");
    let names: Vec<&str> = categories
        .iter()
        .map(|c| c["name"].as_str().expect("name"))
        .collect();

    // Ascending lexicographic order.
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    let moderation = categories
        .iter()
        .find(|c| c["name"] == "moderation")
        .expect("moderation category");
    assert_eq!(moderation["style"]["icon"], "Shield");
    assert!(moderation["count"].as_u64().expect("count") > 0);
}

#[tokio::test]
async fn siteconfig_endpoint_serves_active_config() {
    let (status, body) = get_json(test_state(), "/siteconfig.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["botName"], "Eris Bot");
    assert_eq!(body["tagline"], "Systematically does it all");
}

#[tokio::test]
async fn discord_route_redirects_to_server_invite() {
    let mut config = SiteConfig::default();
    config.discord_server_invite = "https://discord.gg/example".to_string();
    let state = AppState::new(ConfigCache::new(config), Catalog::builtin().clone());

    let response = router(state)
        .oneshot(Request::get("/discord").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .expect("location header"),
        "https://discord.gg/example"
    );
}
