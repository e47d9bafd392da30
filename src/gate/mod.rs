//! Route protection: path classification and the cookie-presence gate.
//!
//! The gate decides, per request, whether to forward the request or send the
//! client to the login page. It only checks that the session cookie is
//! present ([`SessionPresence`]); it never validates the token. Handlers that
//! need a verified identity must use [`crate::session::SessionValidity`]
//! (via the `VerifiedSession` extractor). Passing the gate is not proof of
//! authentication.

pub mod decision;
pub mod paths;

pub use decision::{decode_callback, encode_callback, Decision};
pub use paths::{is_protected, ProtectedPaths};

use serde::Serialize;

use crate::config::ConfigError;
use crate::session::{CookieSource, SessionPresence};

/// Immutable gate configuration, constructed once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateConfig {
    protected: ProtectedPaths,
    cookie_name: String,
    login_path: String,
    callback_param: String,
}

impl GateConfig {
    pub fn new(
        protected: ProtectedPaths,
        cookie_name: impl Into<String>,
        login_path: impl Into<String>,
        callback_param: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let cookie_name = cookie_name.into();
        let login_path = login_path.into();
        let callback_param = callback_param.into();

        if cookie_name.trim().is_empty() {
            return Err(ConfigError::EmptyCookieName);
        }
        if callback_param.trim().is_empty() {
            return Err(ConfigError::EmptyCallbackParam);
        }
        if !login_path.starts_with('/') {
            return Err(ConfigError::InvalidLoginPath(login_path));
        }
        if protected.contains(&login_path) {
            return Err(ConfigError::LoginPathProtected(login_path));
        }

        Ok(Self {
            protected,
            cookie_name,
            login_path,
            callback_param,
        })
    }

    pub fn protected(&self) -> &ProtectedPaths {
        &self.protected
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn callback_param(&self) -> &str {
        &self.callback_param
    }
}

/// Stateless allow/redirect decision procedure.
#[derive(Debug, Clone)]
pub struct AuthGate {
    config: GateConfig,
}

impl AuthGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn requires_auth(&self, path: &str) -> bool {
        self.config.protected.contains(path)
    }

    /// Classify `path`, then check cookie presence for protected paths.
    pub fn evaluate<C: CookieSource + ?Sized>(&self, path: &str, cookies: &C) -> Decision {
        if !self.requires_auth(path) {
            return Decision::Continue;
        }

        if SessionPresence::check(cookies, &self.config.cookie_name) {
            return Decision::Continue;
        }

        Decision::RedirectTo {
            login_path: self.config.login_path.clone(),
            callback_url: encode_callback(path),
        }
    }
}
