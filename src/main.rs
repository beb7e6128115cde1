use std::sync::Arc;

mod app;
mod auth;
mod comments;
mod config;
mod db;
mod dto;
mod error;
mod extract;
mod ownership;
mod skills;
mod state;
#[cfg(test)]
mod test_support;
mod validation;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "skillmarket=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = Arc::new(AppConfig::from_env()?);
    tracing::info!(
        strict_validation = config.strict_validation,
        max_connections = config.db_max_connections,
        "config loaded"
    );

    let pool = db::connect(&config).await?;

    if let Err(e) = db::migrate(&pool).await {
        tracing::warn!(error = %e, "migration failed; continuing");
    }

    let app = app::build_app(AppState::from_pool(pool.clone(), config));
    app::serve(app).await?;

    pool.close().await;
    tracing::info!("database pool closed");
    Ok(())
}
