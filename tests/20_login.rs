mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn login_sets_http_only_session_cookie() -> Result<()> {
    let app = common::test_app()?;

    let res = common::post_json(
        &app,
        "/login",
        None,
        &json!({ "email": common::DEMO_EMAIL, "password": common::DEMO_PASSWORD }),
    )
    .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let cookie = common::set_cookie(&res).unwrap_or_default();
    assert!(cookie.starts_with("session="), "cookie: {cookie}");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));

    let body = common::body_json(res).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], common::DEMO_EMAIL);
    assert_eq!(body["data"]["redirect_to"], "/dashboard");
    assert_eq!(body["data"]["expires_in"], 7 * 24 * 3600);
    Ok(())
}

#[tokio::test]
async fn login_honours_local_callback_only() -> Result<()> {
    let app = common::test_app()?;

    let res = common::post_json(
        &app,
        "/login",
        None,
        &json!({
            "email": common::DEMO_EMAIL,
            "password": common::DEMO_PASSWORD,
            "callbackUrl": "/transactions/2"
        }),
    )
    .await?;
    let body = common::body_json(res).await?;
    assert_eq!(body["data"]["redirect_to"], "/transactions/2");

    let res = common::post_json(
        &app,
        "/login",
        None,
        &json!({
            "email": common::DEMO_EMAIL,
            "password": common::DEMO_PASSWORD,
            "callbackUrl": "https://evil.example/phish"
        }),
    )
    .await?;
    let body = common::body_json(res).await?;
    assert_eq!(body["data"]["redirect_to"], "/dashboard");
    Ok(())
}

#[tokio::test]
async fn wrong_password_is_unauthorized() -> Result<()> {
    let app = common::test_app()?;

    let res = common::post_json(
        &app,
        "/login",
        None,
        &json!({ "email": common::DEMO_EMAIL, "password": "nope" }),
    )
    .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(common::set_cookie(&res).is_none());
    Ok(())
}

#[tokio::test]
async fn missing_fields_are_validation_errors() -> Result<()> {
    let app = common::test_app()?;

    let res = common::post_json(&app, "/login", None, &json!({ "email": " ", "password": "x" })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(res).await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["email"].is_string());
    Ok(())
}

#[tokio::test]
async fn session_cookie_unlocks_protected_pages() -> Result<()> {
    let app = common::test_app()?;
    let cookie = common::login(&app).await?;

    let res = common::get(&app, "/dashboard", Some(&cookie)).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = common::body_json(res).await?;
    assert_eq!(body["data"]["user"], common::DEMO_EMAIL);
    Ok(())
}

#[tokio::test]
async fn token_signed_elsewhere_is_rejected_by_handlers() -> Result<()> {
    let app = common::test_app()?;

    let mut other = common::test_config();
    other.auth.session_secret = "a-different-secret".to_string();
    let other_app = common::test_app_with(other)?;
    let foreign_cookie = common::login(&other_app).await?;

    let res = common::get(&app, "/settings", Some(&foreign_cookie)).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn login_page_echoes_sanitized_callback() -> Result<()> {
    let app = common::test_app()?;

    let res = common::get(&app, "/login?callbackUrl=%2Ftransactions%2F123", None).await?;
    let body = common::body_json(res).await?;
    assert_eq!(body["data"]["callback_url"], "/transactions/123");
    assert_eq!(body["data"]["has_session_cookie"], false);

    let res = common::get(&app, "/login?callbackUrl=%2F%2Fevil.example", Some("session=x")).await?;
    let body = common::body_json(res).await?;
    assert_eq!(body["data"]["callback_url"], "/dashboard");
    assert_eq!(body["data"]["has_session_cookie"], true);
    Ok(())
}

#[tokio::test]
async fn logout_clears_cookie_and_redirects_home() -> Result<()> {
    let app = common::test_app()?;
    let cookie = common::login(&app).await?;

    let res = common::post_json(&app, "/logout", Some(&cookie), &json!({})).await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&res).as_deref(), Some("/"));

    let cleared = common::set_cookie(&res).unwrap_or_default();
    assert!(cleared.starts_with("session=;"), "cookie: {cleared}");
    assert!(cleared.contains("Max-Age=0"));
    Ok(())
}
