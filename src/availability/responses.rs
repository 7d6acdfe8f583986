//! Response DTOs for availability API endpoints.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::calendar::MonthCalendar;
use super::rules::{OccupancySummary, RoomAvailabilityRecord, TileStatus, UnavailableRoom};

/// Response for a room partition
#[derive(Debug, Serialize)]
pub struct PartitionResponse {
    pub date: NaiveDate,
    pub summary: OccupancySummary,
    pub available: Vec<RoomAvailabilityRecord>,
    pub unavailable: Vec<UnavailableRoom>,
}

/// Response for a single calendar cell
#[derive(Debug, Serialize)]
pub struct TileResponse {
    pub room_id: String,
    pub date: NaiveDate,
    pub status: TileStatus,
}

/// Response for a room's month calendar
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub room_id: Uuid,
    pub room_number: String,
    #[serde(flatten)]
    pub calendar: MonthCalendar,
}
