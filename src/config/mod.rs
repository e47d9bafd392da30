use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::gate::{GateConfig, ProtectedPaths};

pub const DEFAULT_PROTECTED_PATHS: &[&str] = &[
    "/dashboard",
    "/transactions",
    "/budgets",
    "/reports",
    "/settings",
];

/// Longest accepted session lifetime (one year).
pub const MAX_SESSION_EXPIRY_HOURS: u64 = 24 * 365;

// sha256("demo")
const DEMO_PASSWORD_SHA256: &str =
    "2a97516c354b68848cdbd8f54a226a0a55b21ed138e207ad6c5cbb9c00aa5aea";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Auth cookie name must not be empty")]
    EmptyCookieName,

    #[error("Callback parameter name must not be empty")]
    EmptyCallbackParam,

    #[error("Login path must start with '/': {0}")]
    InvalidLoginPath(String),

    #[error("Invalid protected path prefix '{0}': must start with '/', must not be '/' and must not end with '/'")]
    InvalidPrefix(String),

    #[error("Login path '{0}' is covered by the protected path set and would redirect to itself")]
    LoginPathProtected(String),

    #[error("Session secret must be configured in {0:?} mode")]
    MissingSessionSecret(Environment),

    #[error("Session expiry must be between 1 and {max} hours, got {0}", max = MAX_SESSION_EXPIRY_HOURS)]
    InvalidSessionExpiry(u64),

    #[error("Protected handler routes outside the protected path set: {}", .0.join(", "))]
    UncoveredRoutes(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Canonical protected prefix list. Both the gate logic and the route
    /// matcher patterns are derived from this one list.
    pub protected_paths: Vec<String>,
    pub cookie_name: String,
    pub login_path: String,
    pub callback_param: String,
    #[serde(skip_serializing)]
    pub session_secret: String,
    pub session_expiry_hours: u64,
    pub cookie_secure: bool,
    pub account_email: String,
    #[serde(skip_serializing)]
    pub account_password_sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source, then validate it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        let config = match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_overrides(&lookup);

        config.validate()?;
        Ok(config)
    }

    fn with_overrides<F>(mut self, lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(v) = lookup("APP_PORT").or_else(|| lookup("PORT")) {
            self.server.port = parse_override("PORT", &v, self.server.port);
        }

        // Auth overrides
        if let Some(v) = lookup("AUTH_PROTECTED_PATHS") {
            self.auth.protected_paths = split_list(&v);
        }
        if let Some(v) = lookup("AUTH_COOKIE_NAME") {
            self.auth.cookie_name = v.trim().to_string();
        }
        if let Some(v) = lookup("AUTH_LOGIN_PATH") {
            self.auth.login_path = v.trim().to_string();
        }
        if let Some(v) = lookup("AUTH_CALLBACK_PARAM") {
            self.auth.callback_param = v.trim().to_string();
        }
        if let Some(v) = lookup("AUTH_SESSION_SECRET") {
            self.auth.session_secret = v;
        }
        if let Some(v) = lookup("AUTH_SESSION_EXPIRY_HOURS") {
            self.auth.session_expiry_hours =
                parse_override("AUTH_SESSION_EXPIRY_HOURS", &v, self.auth.session_expiry_hours);
        }
        if let Some(v) = lookup("AUTH_COOKIE_SECURE") {
            self.auth.cookie_secure = parse_override("AUTH_COOKIE_SECURE", &v, self.auth.cookie_secure);
        }
        if let Some(v) = lookup("AUTH_ACCOUNT_EMAIL") {
            self.auth.account_email = v.trim().to_string();
        }
        if let Some(v) = lookup("AUTH_ACCOUNT_PASSWORD_SHA256") {
            self.auth.account_password_sha256 = v.trim().to_ascii_lowercase();
        }

        // Security overrides
        if let Some(v) = lookup("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = split_list(&v);
        }

        self
    }

    /// Reject configurations that would make the gate misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gate_config()?;

        if self.environment == Environment::Production && self.auth.session_secret.is_empty() {
            return Err(ConfigError::MissingSessionSecret(self.environment));
        }

        let expiry = self.auth.session_expiry_hours;
        if !(1..=MAX_SESSION_EXPIRY_HOURS).contains(&expiry) {
            return Err(ConfigError::InvalidSessionExpiry(expiry));
        }

        Ok(())
    }

    /// Gate configuration derived from the auth section.
    pub fn gate_config(&self) -> Result<GateConfig, ConfigError> {
        let paths = ProtectedPaths::new(self.auth.protected_paths.iter().cloned())?;
        GateConfig::new(
            paths,
            self.auth.cookie_name.clone(),
            self.auth.login_path.clone(),
            self.auth.callback_param.clone(),
        )
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            auth: AuthConfig {
                protected_paths: DEFAULT_PROTECTED_PATHS.iter().map(|s| s.to_string()).collect(),
                cookie_name: "session".to_string(),
                login_path: "/login".to_string(),
                callback_param: "callbackUrl".to_string(),
                session_secret: "pocketbook-development-secret".to_string(),
                session_expiry_hours: 24 * 7, // 1 week
                cookie_secure: false,
                account_email: "demo@pocketbook.local".to_string(),
                account_password_sha256: DEMO_PASSWORD_SHA256.to_string(),
            },
            security: SecurityConfig {
                cors_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                ],
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 8080 },
            auth: AuthConfig {
                protected_paths: DEFAULT_PROTECTED_PATHS.iter().map(|s| s.to_string()).collect(),
                cookie_name: "session".to_string(),
                login_path: "/login".to_string(),
                callback_param: "callbackUrl".to_string(),
                session_secret: String::new(),
                session_expiry_hours: 12,
                cookie_secure: true,
                account_email: String::new(),
                account_password_sha256: String::new(),
            },
            security: SecurityConfig {
                cors_origins: vec!["https://app.pocketbook.example".to_string()],
            },
        }
    }
}

fn parse_override<T: FromStr>(key: &str, raw: &str, current: T) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Ignoring unparsable {}='{}', keeping the default", key, raw);
            current
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
