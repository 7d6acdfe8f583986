//! Printable booking and reservation folios

use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use uuid::Uuid;

use crate::error::Result;
use crate::pricing::responses::StayQuoteResponse;
use crate::pricing::services::{self, FolioResult};
use crate::qr;
use crate::AppState;

use super::dashboard::format_money;

/// Folio template
#[derive(Template)]
#[template(path = "folio.html")]
struct FolioTemplate {
    hotel_name: String,
    kind: String,
    id: String,
    guest_name: String,
    guest_phone: String,
    room_number: String,
    check_in: String,
    check_out: String,
    created_on: String,
    status: String,
    nights: i64,
    number_of_rooms: i64,
    base_rate: String,
    subtotal: String,
    discount_percent: String,
    discount_amount: String,
    total: String,
    advance_paid: String,
    balance_due: String,
    qr_data_uri: String,
    has_qr: bool,
}

pub async fn booking_page(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Html<String>> {
    let result = services::booking_folio(&state.db, &state.cache, booking_id).await?;
    let qr_data_uri = qr::booking_qr_data_uri(booking_id)?;
    render(&state, result, Some(qr_data_uri))
}

pub async fn reservation_page(
    State(state): State<AppState>,
    Path(reservation_id): Path<Uuid>,
) -> Result<Html<String>> {
    let result = services::reservation_folio(&state.db, &state.cache, reservation_id).await?;
    render(&state, result, None)
}

fn render(
    state: &AppState,
    result: FolioResult,
    qr_data_uri: Option<String>,
) -> Result<Html<String>> {
    let template = folio_template(
        &state.config.hotel_name,
        &state.config.currency,
        result,
        qr_data_uri,
    );
    Ok(Html(template.render()?))
}

fn folio_template(
    hotel_name: &str,
    currency: &str,
    result: FolioResult,
    qr_data_uri: Option<String>,
) -> FolioTemplate {
    let quote = StayQuoteResponse::from_breakdown(&result.breakdown, currency);
    let record = result.record;
    let date_or_dash = |date: Option<chrono::NaiveDate>| {
        date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
    };

    FolioTemplate {
        hotel_name: hotel_name.to_string(),
        kind: result.kind.label().to_string(),
        id: record.id.to_string(),
        guest_name: record.guest_name.unwrap_or_else(|| "Walk-in guest".to_string()),
        guest_phone: record.guest_phone.unwrap_or_default(),
        room_number: record.room_number.unwrap_or_else(|| "-".to_string()),
        check_in: date_or_dash(record.check_in_date),
        check_out: date_or_dash(record.check_out_date),
        created_on: date_or_dash(record.created_at.map(|at| at.date_naive())),
        status: record.status.unwrap_or_default(),
        nights: quote.nights,
        number_of_rooms: quote.number_of_rooms,
        base_rate: format_money(quote.base_rate),
        subtotal: format_money(quote.subtotal),
        discount_percent: quote.discount_percent.to_string(),
        discount_amount: format_money(quote.discount_amount),
        total: format_money(quote.total),
        advance_paid: format_money(quote.advance_paid),
        balance_due: format_money(quote.balance_due),
        has_qr: qr_data_uri.is_some(),
        qr_data_uri: qr_data_uri.unwrap_or_default(),
    }
}
