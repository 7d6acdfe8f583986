//! Request DTOs for availability API endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::dates::{calendar_date, calendar_date_option};

use super::rules::RoomAvailabilityRecord;

/// Request to partition posted room records for a date
#[derive(Debug, Deserialize)]
pub struct PartitionRequest {
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    pub rooms: Vec<RoomAvailabilityRecord>,
}

/// Request to classify one calendar cell for one room
#[derive(Debug, Deserialize)]
pub struct TileRequest {
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    /// Overrides the server's local date
    #[serde(default, with = "calendar_date_option")]
    pub today: Option<NaiveDate>,
    pub room: RoomAvailabilityRecord,
}

/// Query parameters for the availability board
#[derive(Debug, Default, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub date: Option<String>,
}

/// Query parameters for a room calendar
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    /// `YYYY-MM`; defaults to the current month
    #[serde(default)]
    pub month: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_request() {
        let request: PartitionRequest = serde_json::from_str(
            r#"{
                "date": "2024-07-03T09:00:00.000Z",
                "rooms": [
                    {"roomId": "7f0c8a1e-3a2b-4c5d-9e8f-0a1b2c3d4e5f", "bookedTillDate": "2024-07-05"},
                    {"_id": "0b9e6c1a-1111-4c5d-9e8f-0a1b2c3d4e5f", "status": "available"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 7, 3).unwrap());
        assert_eq!(request.rooms.len(), 2);
    }

    #[test]
    fn test_tile_request_requires_date() {
        let result: Result<TileRequest, _> = serde_json::from_str(
            r#"{"room": {"roomId": "7f0c8a1e-3a2b-4c5d-9e8f-0a1b2c3d4e5f"}}"#,
        );
        assert!(result.is_err());
    }
}
