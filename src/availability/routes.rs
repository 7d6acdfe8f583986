//! Availability API route handlers

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::dates::{local_today, parse_calendar_date};
use crate::error::{AppError, Result};
use crate::AppState;

use super::calendar::parse_month;
use super::requests::{AvailabilityQuery, CalendarQuery, PartitionRequest, TileRequest};
use super::responses::{CalendarResponse, PartitionResponse, TileResponse};
use super::rules::{classify_tile, partition_rooms, summarize, RoomPartition};
use super::services;

/// Availability routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/availability", get(room_availability))
        .route("/api/availability/partition", post(partition))
        .route("/api/availability/tile", post(tile))
        .route("/api/rooms/:room_id/calendar", get(room_calendar))
}

/// Partition posted room records; no database access
async fn partition(Json(request): Json<PartitionRequest>) -> Json<PartitionResponse> {
    let date = request.date;
    Json(partition_response(partition_rooms(request.rooms, date), date))
}

/// Classify one calendar cell; no database access
async fn tile(Json(request): Json<TileRequest>) -> Json<TileResponse> {
    let today = request.today.unwrap_or_else(local_today);
    let status = classify_tile(&request.room, request.date, today);
    Json(TileResponse {
        room_id: request.room.room_id,
        date: request.date,
        status,
    })
}

/// Partition every room for `?date=` (default today)
async fn room_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<PartitionResponse>> {
    let date = query_date(query.date.as_deref())?;
    let (_, partition) = services::room_availability(&state.db, &state.cache, date).await?;
    Ok(Json(partition_response(partition, date)))
}

/// Month calendar for one room, `?month=YYYY-MM` (default current month)
async fn room_calendar(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>> {
    let month = match query.month.as_deref().filter(|m| !m.trim().is_empty()) {
        Some(raw) => Some(
            parse_month(raw).ok_or_else(|| AppError::BadRequest(format!("invalid month '{}'", raw)))?,
        ),
        None => None,
    };

    let (room, calendar) =
        services::room_calendar(&state.db, &state.cache, room_id, month, local_today()).await?;

    Ok(Json(CalendarResponse {
        room_id: room.id,
        room_number: room.room_number.clone(),
        calendar,
    }))
}

/// Parse an optional `date` query parameter, defaulting to today
pub(crate) fn query_date(raw: Option<&str>) -> Result<chrono::NaiveDate> {
    match raw.filter(|d| !d.trim().is_empty()) {
        Some(raw) => parse_calendar_date(raw)
            .ok_or_else(|| AppError::BadRequest(format!("invalid date '{}'", raw))),
        None => Ok(local_today()),
    }
}

fn partition_response(partition: RoomPartition, date: chrono::NaiveDate) -> PartitionResponse {
    let summary = summarize(&partition);
    PartitionResponse {
        date,
        summary,
        available: partition.available,
        unavailable: partition.unavailable,
    }
}
