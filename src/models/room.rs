//! Room and room category models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::availability::{RoomAvailabilityRecord, RoomStatus};

/// Room category from room_categories
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomCategory {
    pub id: Uuid,
    pub name: String,
    pub base_rate: Decimal,
}

/// Room from rooms, joined with its category
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: Uuid,
    pub room_number: String,
    pub category_name: Option<String>,
    pub category_base_rate: Option<Decimal>,
    pub price: Option<Decimal>,
    pub status: Option<String>,
    pub booked_till_date: Option<NaiveDate>,
    pub reserved_dates: Vec<NaiveDate>,
}

impl Room {
    /// Nightly rate: the room's own price, else its category's base rate
    pub fn nightly_rate(&self) -> Option<Decimal> {
        self.price.or(self.category_base_rate)
    }

    pub fn availability_record(&self) -> RoomAvailabilityRecord {
        RoomAvailabilityRecord {
            room_id: self.id.to_string(),
            room_number: Some(self.room_number.clone()),
            status: self.status.as_deref().map(RoomStatus::parse),
            booked_till_date: self.booked_till_date,
            reserved_dates: self.reserved_dates.clone(),
        }
    }
}
