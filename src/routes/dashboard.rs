//! Availability board page

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

use crate::availability::requests::AvailabilityQuery;
use crate::availability::routes::query_date;
use crate::availability::{services, summarize, OccupancySummary, Unavailability};
use crate::error::Result;
use crate::models::Room;
use crate::pricing::responses::MoneyResponse;
use crate::AppState;

/// One room line on the board
struct RoomLine {
    room_number: String,
    category: String,
    rate: String,
    note: String,
}

/// One category line in the rate card
struct CategoryLine {
    name: String,
    base_rate: String,
}

/// Dashboard template
#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    hotel_name: String,
    date: String,
    previous_date: String,
    next_date: String,
    summary: OccupancySummary,
    available: Vec<RoomLine>,
    unavailable: Vec<RoomLine>,
    categories: Vec<CategoryLine>,
    has_available: bool,
    has_unavailable: bool,
    has_categories: bool,
}

/// Availability board for `?date=` (default today)
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Html<String>> {
    let date = query_date(query.date.as_deref())?;
    let currency = state.config.currency.as_str();

    let (rooms, partition) = services::room_availability(&state.db, &state.cache, date).await?;
    let categories = state.cache.all_categories(&state.db).await?;

    let rooms_by_id = index_rooms(&rooms);
    let find_room = |id: &str| rooms_by_id.get(id).copied();

    let available = partition
        .available
        .iter()
        .map(|record| {
            room_line(
                find_room(&record.room_id),
                record.room_number.clone(),
                currency,
                String::new(),
            )
        })
        .collect::<Vec<_>>();

    let unavailable = partition
        .unavailable
        .iter()
        .map(|entry| {
            let note = match entry.reason {
                Unavailability::Booked => match entry.room.booked_till_date {
                    Some(till) => format!("Booked till {}", till),
                    None => "Booked".to_string(),
                },
                Unavailability::Reserved => "Reserved".to_string(),
                Unavailability::StatusBooked => "Marked booked".to_string(),
            };
            room_line(
                find_room(&entry.room.room_id),
                entry.room.room_number.clone(),
                currency,
                note,
            )
        })
        .collect::<Vec<_>>();

    let categories = categories
        .iter()
        .map(|category| CategoryLine {
            name: category.name.clone(),
            base_rate: format_money(MoneyResponse::rounded(category.base_rate, currency)),
        })
        .collect::<Vec<_>>();

    let template = DashboardTemplate {
        hotel_name: state.config.hotel_name.clone(),
        date: date.to_string(),
        previous_date: shift(date, -1).to_string(),
        next_date: shift(date, 1).to_string(),
        summary: summarize(&partition),
        has_available: !available.is_empty(),
        has_unavailable: !unavailable.is_empty(),
        has_categories: !categories.is_empty(),
        available,
        unavailable,
        categories,
    };

    Ok(Html(template.render()?))
}

/// Rooms keyed by the id their availability records carry
fn index_rooms(rooms: &[Room]) -> HashMap<String, &Room> {
    rooms
        .iter()
        .map(|room| (room.id.to_string(), room))
        .collect()
}

fn room_line(
    room: Option<&Room>,
    room_number: Option<String>,
    currency: &str,
    note: String,
) -> RoomLine {
    RoomLine {
        room_number: room_number.unwrap_or_else(|| "-".to_string()),
        category: room
            .and_then(|r| r.category_name.clone())
            .unwrap_or_default(),
        rate: room
            .and_then(Room::nightly_rate)
            .map(|rate| format_money(MoneyResponse::rounded(rate, currency)))
            .unwrap_or_default(),
        note,
    }
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days < 0 {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// `1234.50 USD`
pub(crate) fn format_money(money: MoneyResponse) -> String {
    format!("{} {}", money.amount, money.currency)
}
