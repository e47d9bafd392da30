#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use pocketbook::app;
use pocketbook::config::AppConfig;
use pocketbook::state::AppState;

pub const DEMO_EMAIL: &str = "demo@pocketbook.local";
pub const DEMO_PASSWORD: &str = "demo";

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.auth.session_secret = "integration-test-secret".to_string();
    config
}

pub fn test_app() -> Result<Router> {
    test_app_with(test_config())
}

pub fn test_app_with(config: AppConfig) -> Result<Router> {
    Ok(app::router(AppState::new(config)?))
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Result<Response<Body>> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    Ok(app.clone().oneshot(builder.body(Body::empty())?).await?)
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    cookie: Option<&str>,
    body: &Value,
) -> Result<Response<Body>> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    Ok(app
        .clone()
        .oneshot(builder.body(Body::from(body.to_string()))?)
        .await?)
}

pub async fn body_json(response: Response<Body>) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Log in as the demo account and return the `name=value` cookie pair.
pub async fn login(app: &Router) -> Result<String> {
    let response = post_json(
        app,
        "/login",
        None,
        &serde_json::json!({ "email": DEMO_EMAIL, "password": DEMO_PASSWORD }),
    )
    .await?;
    anyhow::ensure!(response.status() == StatusCode::OK, "login failed: {}", response.status());

    let header = set_cookie(&response).context("login did not set a cookie")?;
    let pair = header.split(';').next().context("empty Set-Cookie")?;
    Ok(pair.trim().to_string())
}
