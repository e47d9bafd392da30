use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::config::AuthConfig;

/// HttpOnly session cookie carrying `token`.
pub fn session_cookie(auth: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((auth.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(auth.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(auth.session_expiry_hours as i64))
        .build()
}

/// Expired, empty session cookie that makes the browser drop the session.
pub fn clear_session_cookie(auth: &AuthConfig) -> Cookie<'static> {
    Cookie::build((auth.cookie_name.clone(), String::new()))
        .path("/")
        .http_only(true)
        .secure(auth.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
}
