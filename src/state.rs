use std::sync::Arc;

use crate::app;
use crate::config::{AppConfig, ConfigError};
use crate::gate::AuthGate;
use crate::session::{AccountCredentials, JwtSessions};

/// Shared, immutable per-process state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gate: Arc<AuthGate>,
    pub sessions: Arc<JwtSessions>,
    pub account: Arc<AccountCredentials>,
}

impl AppState {
    /// Build state from a configuration. Called once at startup.
    ///
    /// Fails if the configuration is invalid or if any protected handler route
    /// falls outside the protected path set.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let gate = AuthGate::new(config.gate_config()?);

        let uncovered = app::uncovered_routes(gate.config().protected());
        if !uncovered.is_empty() {
            let routes = uncovered.into_iter().map(str::to_string).collect();
            return Err(ConfigError::UncoveredRoutes(routes).into());
        }

        let sessions = JwtSessions::from_config(&config.auth)?;
        let account = AccountCredentials::from_config(&config.auth);

        Ok(Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
            sessions: Arc::new(sessions),
            account: Arc::new(account),
        })
    }
}
