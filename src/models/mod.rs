//! Database models for the hotel backend's tables

mod room;
mod stay;

pub use room::{Room, RoomCategory};
pub use stay::{FolioKind, StayRecord};
