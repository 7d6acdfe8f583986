//! Room availability rules.
//!
//! Pure functions over room records - no database access. A room is
//! unavailable on a date when it is booked through that date (inclusive) or
//! holds a reservation for exactly that date.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::dates::{calendar_date_nullable, calendar_date_vec};
use crate::pricing::calculators::nightly_dates;

/// Room status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Booked,
    Reserved,
    Maintenance,
    Unknown,
}

impl RoomStatus {
    /// Parse a backend status string, case-insensitively.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "available" => Self::Available,
            "booked" => Self::Booked,
            "reserved" => Self::Reserved,
            "maintenance" => Self::Maintenance,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for RoomStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A room's known unavailability
///
/// `room_id` is opaque: database rooms carry a UUID, posted records carry
/// whatever id the backend issued (usually an ObjectId hex string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailabilityRecord {
    #[serde(alias = "_id", alias = "id")]
    pub room_id: String,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub status: Option<RoomStatus>,
    #[serde(default, deserialize_with = "calendar_date_nullable::deserialize")]
    pub booked_till_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "calendar_date_vec::deserialize")]
    pub reserved_dates: Vec<NaiveDate>,
}

/// Why a room cannot be offered on a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unavailability {
    /// Booked through a date on or after the query date
    Booked,
    /// Holds a reservation for the query date
    Reserved,
    /// Dates are free but the backend flags the room as booked
    StatusBooked,
}

/// Classification of a single calendar cell for one room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStatus {
    Past,
    Booked,
    Reserved,
    Available,
}

/// True when the room is booked through `date` (inclusive).
pub fn is_booked_on(record: &RoomAvailabilityRecord, date: NaiveDate) -> bool {
    record.booked_till_date.is_some_and(|till| date <= till)
}

/// True when the room holds a reservation for exactly `date`.
pub fn is_reserved_on(record: &RoomAvailabilityRecord, date: NaiveDate) -> bool {
    record.reserved_dates.contains(&date)
}

/// Date-based unavailability, booked taking precedence over reserved.
pub fn date_unavailability(
    record: &RoomAvailabilityRecord,
    date: NaiveDate,
) -> Option<Unavailability> {
    if is_booked_on(record, date) {
        Some(Unavailability::Booked)
    } else if is_reserved_on(record, date) {
        Some(Unavailability::Reserved)
    } else {
        None
    }
}

/// Decide whether a room can be offered on `date`.
///
/// An explicit `available` status always wins. Otherwise the room must be
/// free by date and must not carry a `booked` status.
pub fn room_unavailability(
    record: &RoomAvailabilityRecord,
    date: NaiveDate,
) -> Option<Unavailability> {
    if record.status == Some(RoomStatus::Available) {
        return None;
    }
    match date_unavailability(record, date) {
        Some(reason) => Some(reason),
        None if record.status == Some(RoomStatus::Booked) => Some(Unavailability::StatusBooked),
        None => None,
    }
}

/// A room that cannot be offered, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnavailableRoom {
    pub room: RoomAvailabilityRecord,
    pub reason: Unavailability,
}

/// Rooms split into offerable and booked/reserved groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoomPartition {
    pub date: Option<NaiveDate>,
    pub available: Vec<RoomAvailabilityRecord>,
    pub unavailable: Vec<UnavailableRoom>,
}

impl RoomPartition {
    pub fn len(&self) -> usize {
        self.available.len() + self.unavailable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition rooms into available and booked/reserved for `date`.
///
/// Every input record lands in exactly one group, in input order.
pub fn partition_rooms<I>(records: I, date: NaiveDate) -> RoomPartition
where
    I: IntoIterator<Item = RoomAvailabilityRecord>,
{
    let mut partition = RoomPartition {
        date: Some(date),
        ..Default::default()
    };

    for record in records {
        match room_unavailability(&record, date) {
            Some(reason) => partition.unavailable.push(UnavailableRoom {
                room: record,
                reason,
            }),
            None => partition.available.push(record),
        }
    }

    partition
}

/// Classify one calendar cell: past, then booked, then reserved, else available.
pub fn classify_tile(
    record: &RoomAvailabilityRecord,
    date: NaiveDate,
    today: NaiveDate,
) -> TileStatus {
    if date < today {
        TileStatus::Past
    } else if is_booked_on(record, date) {
        TileStatus::Booked
    } else if is_reserved_on(record, date) {
        TileStatus::Reserved
    } else {
        TileStatus::Available
    }
}

/// A night of a requested stay that clashes with existing bookings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StayConflict {
    pub date: NaiveDate,
    pub reason: Unavailability,
}

/// Nights of a stay on which the room is booked or reserved.
pub fn stay_conflicts(
    record: &RoomAvailabilityRecord,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Vec<StayConflict> {
    nightly_dates(check_in, check_out)
        .into_iter()
        .filter_map(|date| {
            date_unavailability(record, date).map(|reason| StayConflict { date, reason })
        })
        .collect()
}

/// Dashboard header figures for a partition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OccupancySummary {
    pub total_rooms: usize,
    pub available: usize,
    pub booked: usize,
    pub reserved: usize,
    /// Share of rooms that cannot be offered, 0-100 with one decimal
    pub occupancy_percent: f64,
}

pub fn summarize(partition: &RoomPartition) -> OccupancySummary {
    let reserved = partition
        .unavailable
        .iter()
        .filter(|room| room.reason == Unavailability::Reserved)
        .count();
    let booked = partition.unavailable.len() - reserved;
    let total_rooms = partition.len();

    let occupancy_percent = if total_rooms == 0 {
        0.0
    } else {
        let raw = partition.unavailable.len() as f64 * 100.0 / total_rooms as f64;
        (raw * 10.0).round() / 10.0
    };

    OccupancySummary {
        total_rooms,
        available: partition.available.len(),
        booked,
        reserved,
        occupancy_percent,
    }
}
