// handlers/public/login.rs - GET/POST /login and POST /logout

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::session::{clear_session_cookie, session_cookie, SessionPresence};
use crate::state::AppState;

/// Where to land after login when no usable callback was supplied.
pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackUrl", alias = "callback_url")]
    pub callback_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub email: String,
    pub redirect_to: String,
    pub expires_in: u64,
}

/// Only same-site absolute paths are honoured as post-login destinations.
/// Anything else (absolute URLs, protocol-relative `//host`, backslash
/// tricks, or the login page itself) falls back to the dashboard.
pub fn sanitize_callback(raw: Option<&str>, login_path: &str) -> String {
    match raw.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control)
                && path != login_path =>
        {
            path.to_string()
        }
        _ => DEFAULT_AFTER_LOGIN.to_string(),
    }
}

/// GET /login - Login page data
///
/// Echoes the sanitized callback so the login form can post it back.
pub async fn login_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResponse<Value> {
    let gate = state.gate.config();
    let callback = sanitize_callback(
        query.get(gate.callback_param()).map(String::as_str),
        gate.login_path(),
    );

    ApiResponse::success(json!({
        "title": "Sign in to Pocketbook",
        "callback_url": callback,
        "has_session_cookie": SessionPresence::check(&jar, gate.cookie_name()),
    }))
}

/// POST /login - Verify credentials and set the session cookie
///
/// Expected Input:
/// ```json
/// { "email": "demo@pocketbook.local", "password": "demo", "callbackUrl": "/transactions/12" }
/// ```
///
/// Expected Output (Success), with `Set-Cookie: session=...; HttpOnly`:
/// ```json
/// { "success": true, "data": { "email": "...", "redirect_to": "/transactions/12", "expires_in": 604800 } }
/// ```
pub async fn login_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, ApiResponse<LoginResponse>), ApiError> {
    let email = payload.email.trim();
    if email.is_empty() {
        return Err(ApiError::field_error("email", "Email is required"));
    }
    if payload.password.is_empty() {
        return Err(ApiError::field_error("password", "Password is required"));
    }

    if !state.account.verify(email, &payload.password) {
        tracing::warn!("Failed login attempt for '{}'", email);
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let token = state.sessions.issue(email)?;
    let jar = jar.add(session_cookie(&state.config.auth, token));

    let redirect_to = sanitize_callback(
        payload.callback_url.as_deref(),
        state.gate.config().login_path(),
    );

    tracing::info!("Login succeeded for '{}', redirecting to {}", email, redirect_to);

    let response = LoginResponse {
        email: email.to_string(),
        redirect_to,
        expires_in: state.sessions.expiry_hours() * 3600,
    };

    Ok((jar, ApiResponse::success(response)))
}

/// POST /logout - Clear the session cookie and go home
pub async fn logout_post(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    tracing::info!("Logout");
    let jar = jar.add(clear_session_cookie(&state.config.auth));
    (jar, Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_local_paths() {
        assert_eq!(sanitize_callback(Some("/transactions/12"), "/login"), "/transactions/12");
        assert_eq!(sanitize_callback(Some("/reports?year=2024"), "/login"), "/reports?year=2024");
    }

    #[test]
    fn rejects_offsite_and_odd_targets() {
        for bad in [
            "https://evil.example",
            "//evil.example/x",
            "/\\evil.example",
            "dashboard",
            "",
            "/login",
        ] {
            assert_eq!(sanitize_callback(Some(bad), "/login"), DEFAULT_AFTER_LOGIN, "{bad:?}");
        }
        assert_eq!(sanitize_callback(None, "/login"), DEFAULT_AFTER_LOGIN);
    }
}
