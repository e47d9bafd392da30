use anyhow::Context;

use crate::app;
use crate::config::AppConfig;
use crate::state::AppState;

pub async fn handle(mut config: AppConfig, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting Pocketbook in {:?} mode", config.environment);
    tracing::info!(
        "Protected prefixes: {}",
        config.auth.protected_paths.join(", ")
    );

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let state = AppState::new(config)?;
    let app = app::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Pocketbook listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
