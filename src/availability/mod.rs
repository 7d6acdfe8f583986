//! Room availability for the front desk.
//!
//! Partitions rooms into offerable and booked/reserved for a date, classifies
//! calendar cells, and detects clashes for a requested stay.

pub mod calendar;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod rules;
pub mod services;

pub use calendar::{month_calendar, parse_month, CalendarTile, MonthCalendar};
pub use routes::router;
pub use rules::{
    classify_tile, partition_rooms, stay_conflicts, summarize, OccupancySummary,
    RoomAvailabilityRecord, RoomPartition, RoomStatus, StayConflict, TileStatus, Unavailability,
    UnavailableRoom,
};
