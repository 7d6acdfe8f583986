//! Front-desk pricing and availability engine.
//!
//! Serves stay quotes, folios, room availability and room calendars to the
//! hotel front-desk dashboard, reading the hotel backend's database.

pub mod availability;
pub mod cache;
pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod qr;
pub mod routes;

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use cache::AppCache;
use config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
    pub config: Arc<Config>,
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(routes::router())
        .merge(pricing::router())
        .merge(availability::router())
        .nest_service("/static", static_dir)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
