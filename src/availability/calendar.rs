//! Month view of a room's availability, one classified tile per day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::rules::{classify_tile, RoomAvailabilityRecord, TileStatus};

/// One day cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarTile {
    pub date: NaiveDate,
    pub status: TileStatus,
}

/// All tiles of one month for one room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    /// Weekday of the 1st, Monday = 0, for laying out the grid
    pub leading_blanks: u32,
    pub tiles: Vec<CalendarTile>,
}

/// Parse a `YYYY-MM` month key.
pub fn parse_month(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1).map(|_| (year, month))
}

/// Classify every day of `year`-`month` for a room.
///
/// Returns `None` for an invalid year/month.
pub fn month_calendar(
    record: &RoomAvailabilityRecord,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Option<MonthCalendar> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let tiles = first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| CalendarTile {
            date,
            status: classify_tile(record, date, today),
        })
        .collect();

    Some(MonthCalendar {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_monday(),
        tiles,
    })
}
