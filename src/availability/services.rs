//! Availability service functions with database access.

use chrono::{Datelike, NaiveDate};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::cache::AppCache;
use crate::error::{AppError, Result};
use crate::models::Room;

use super::calendar::{month_calendar, MonthCalendar};
use super::rules::{partition_rooms, RoomPartition};

/// Partition every room for `date`.
///
/// The room listing the partition was built from is returned with it, so
/// callers never re-read a cache entry that may have expired in between.
pub async fn room_availability(
    pool: &PgPool,
    cache: &AppCache,
    date: NaiveDate,
) -> Result<(Arc<Vec<Room>>, RoomPartition)> {
    let rooms = cache.all_rooms(pool).await?;
    let partition = partition_rooms(rooms.iter().map(Room::availability_record), date);

    tracing::debug!(
        "Availability for {}: {} available, {} booked/reserved",
        date,
        partition.available.len(),
        partition.unavailable.len()
    );

    Ok((rooms, partition))
}

/// Month calendar for one room. `month` defaults to the month of `today`.
pub async fn room_calendar(
    pool: &PgPool,
    cache: &AppCache,
    room_id: Uuid,
    month: Option<(i32, u32)>,
    today: NaiveDate,
) -> Result<(Arc<Room>, MonthCalendar)> {
    let room = cache
        .room(pool, room_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {}", room_id)))?;

    let (year, month) = month.unwrap_or((today.year(), today.month()));
    let calendar = month_calendar(&room.availability_record(), year, month, today)
        .ok_or_else(|| AppError::BadRequest(format!("invalid month {}-{:02}", year, month)))?;

    Ok((room, calendar))
}
