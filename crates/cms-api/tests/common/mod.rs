#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use cms_api::{build_router, AppState, ContentStores};
use cms_core::domain::{
    AboutSection, Branch, MenuItem, NewsItem, Page, Slide, Stat, TeamMember,
};
use cms_infrastructure::memory::seed;
use cms_infrastructure::MemoryStore;
use cms_security::BasicCredentials;
use cms_shared::config::AppConfig;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "s3cret:pass";

pub fn test_config() -> AppConfig {
    let upload_dir = std::env::temp_dir().join(format!("cms-uploads-{}", uuid::Uuid::new_v4()));
    AppConfig::from_toml(&format!(
        r#"
        [admin]
        username = "{}"
        password = "{}"

        [uploads]
        dir = "{}"
        max_size_mb = 1
        "#,
        ADMIN_USER,
        ADMIN_PASSWORD,
        upload_dir.display()
    ))
    .unwrap()
}

/// Router over empty in-memory stores, except for seeded calculator
/// products.
pub fn test_app() -> Router {
    let stores = ContentStores {
        slides: Arc::new(MemoryStore::<Slide>::new()),
        news: Arc::new(MemoryStore::<NewsItem>::new()),
        calculators: Arc::new(MemoryStore::with_records(seed::demo_calculators())),
        branches: Arc::new(MemoryStore::<Branch>::new()),
        team: Arc::new(MemoryStore::<TeamMember>::new()),
        stats: Arc::new(MemoryStore::<Stat>::new()),
        about: Arc::new(MemoryStore::<AboutSection>::new()),
        pages: Arc::new(MemoryStore::<Page>::new()),
        menu: Arc::new(MemoryStore::<MenuItem>::new()),
    };
    build_router(AppState::new(test_config(), stores))
}

pub fn admin_auth() -> String {
    BasicCredentials {
        username: ADMIN_USER.to_string(),
        password: ADMIN_PASSWORD.to_string(),
    }
    .to_header_value()
}

/// Sends one request and returns the status and the decoded JSON body
/// (`Value::Null` when the body is not JSON).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    auth: bool,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if auth {
        builder = builder.header(header::AUTHORIZATION, admin_auth());
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn admin(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send(app, method, uri, body, true).await
}

pub async fn public(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None, false).await
}
