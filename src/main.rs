use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use frontdesk_engine::cache::{start_cache_warmer, AppCache};
use frontdesk_engine::config::Config;
use frontdesk_engine::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontdesk_engine=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let cache = AppCache::new();
    tokio::spawn(start_cache_warmer(
        cache.clone(),
        db.clone(),
        config.cache_warm_interval,
    ));

    let addr = config.bind_addr();
    let state = AppState {
        db,
        cache,
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Front desk engine listening on http://{}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
