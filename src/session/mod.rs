//! Session capabilities.
//!
//! Two deliberately separate checks live here:
//! - [`SessionPresence`]: is a non-empty session cookie attached? Used by the
//!   route gate. Says nothing about who the caller is.
//! - [`SessionValidity`]: is the token genuine and unexpired? Used by handlers
//!   that act on behalf of a user.

pub mod cookie;
pub mod credentials;
pub mod jwt;

use std::collections::{BTreeMap, HashMap};

use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use cookie::{clear_session_cookie, session_cookie};
pub use credentials::AccountCredentials;
pub use jwt::JwtSessions;

/// Read-only view of a request's cookies by name.
pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<&str>;
}

impl CookieSource for CookieJar {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.get(name).map(|c| c.value())
    }
}

impl CookieSource for HashMap<String, String> {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl CookieSource for BTreeMap<String, String> {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Presence-only session check. Not an authentication verifier.
pub struct SessionPresence;

impl SessionPresence {
    pub fn check<C: CookieSource + ?Sized>(cookies: &C, cookie_name: &str) -> bool {
        cookies
            .cookie(cookie_name)
            .map_or(false, |value| !value.is_empty())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No session cookie")]
    Missing,

    #[error("Session expired")]
    Expired,

    #[error("Invalid session token: {0}")]
    Invalid(String),

    #[error("Session secret not configured")]
    MissingSecret,

    #[error("Session token generation failed: {0}")]
    Issue(String),
}

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account email.
    pub sub: String,
    /// Session id, unique per login.
    pub sid: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Verifies a session token's signature and expiry.
pub trait SessionValidity: Send + Sync {
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError>;
}
