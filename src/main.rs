use anyhow::Context;
use produce_catalog::catalog::AppState;
use produce_catalog::config::Config;
use produce_catalog::router::create_app_router;
use produce_catalog::telemetry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(config.log_format);

    // Initialize application state
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "server running");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
