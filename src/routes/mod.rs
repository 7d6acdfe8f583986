//! Front-desk pages and service endpoints

pub mod dashboard;
pub mod folio;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::CacheStats;
use crate::db;
use crate::error::{AppError, Result};
use crate::qr;
use crate::AppState;

/// HTML pages, health, cache administration and QR codes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/bookings/:booking_id", get(folio::booking_page))
        .route("/reservations/:reservation_id", get(folio::reservation_page))
        .route("/api/bookings/:booking_id/qr.png", get(booking_qr))
        .route("/api/cache/stats", get(cache_stats))
        .route("/api/cache/invalidate", post(invalidate_cache))
        .route("/health", get(health))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    database: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
        .map_err(|e| tracing::warn!("Health check database error: {}", e))
        .is_ok();

    Json(HealthResponse {
        status: "ok",
        database,
    })
}

async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

/// Query parameters for cache invalidation
#[derive(Debug, Deserialize)]
struct InvalidateQuery {
    #[serde(default)]
    room_id: Option<Uuid>,
}

async fn invalidate_cache(
    State(state): State<AppState>,
    Query(query): Query<InvalidateQuery>,
) -> Json<CacheStats> {
    match query.room_id {
        Some(room_id) => state.cache.invalidate_room(room_id).await,
        None => state.cache.invalidate_all(),
    }
    Json(state.cache.stats())
}

/// Check-in QR code for an existing booking
async fn booking_qr(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    db::get_booking(&state.db, booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {}", booking_id)))?;

    let png = qr::booking_qr_png(booking_id)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
