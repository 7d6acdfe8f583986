//! Pricing API route handlers

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::Result;
use crate::AppState;

use super::calculators::{calculate_stay_price, StayPriceInput};
use super::requests::{QuoteRoomRequest, QuoteStayRequest};
use super::responses::{FolioResponse, RoomQuoteResponse, StayQuoteResponse};
use super::services::{self, FolioResult};

/// Pricing routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/quote", post(quote_stay))
        .route("/api/rooms/:room_id/quote", post(quote_room))
        .route("/api/bookings/:booking_id/folio", get(booking_folio))
        .route("/api/reservations/:reservation_id/folio", get(reservation_folio))
}

/// Quote a stay at an explicit rate; no database access
async fn quote_stay(
    State(state): State<AppState>,
    Json(request): Json<QuoteStayRequest>,
) -> Json<StayQuoteResponse> {
    let breakdown = calculate_stay_price(&StayPriceInput {
        base_rate: request.base_rate,
        check_in: request.check_in_date,
        check_out: request.check_out_date,
        nights: request.nights,
        number_of_rooms: request.number_of_rooms,
        discount_percent: request.discount_percent.unwrap_or_default(),
        advance_paid: request.advance_paid.unwrap_or_default(),
    });

    let currency = request.currency.as_deref().unwrap_or(&state.config.currency);
    Json(StayQuoteResponse::from_breakdown(&breakdown, currency))
}

/// Quote a stay in a room at the room's rate
async fn quote_room(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    Json(request): Json<QuoteRoomRequest>,
) -> Result<Json<RoomQuoteResponse>> {
    let result = services::quote_room_stay(&state.db, &state.cache, room_id, &request).await?;
    let currency = request.currency.as_deref().unwrap_or(&state.config.currency);

    Ok(Json(RoomQuoteResponse {
        room_id: result.room.id,
        room_number: result.room.room_number,
        category_name: result.room.category_name,
        available: result.conflicts.is_empty(),
        conflicts: result.conflicts,
        quote: StayQuoteResponse::from_breakdown(&result.breakdown, currency),
    }))
}

async fn booking_folio(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<FolioResponse>> {
    let result = services::booking_folio(&state.db, &state.cache, booking_id).await?;
    Ok(Json(folio_response(result, &state.config.currency)))
}

async fn reservation_folio(
    State(state): State<AppState>,
    Path(reservation_id): Path<Uuid>,
) -> Result<Json<FolioResponse>> {
    let result = services::reservation_folio(&state.db, &state.cache, reservation_id).await?;
    Ok(Json(folio_response(result, &state.config.currency)))
}

fn folio_response(result: FolioResult, currency: &str) -> FolioResponse {
    let FolioResult {
        kind,
        record,
        breakdown,
    } = result;

    FolioResponse {
        kind,
        id: record.id,
        guest_name: record.guest_name,
        guest_phone: record.guest_phone,
        room_number: record.room_number,
        check_in_date: record.check_in_date,
        check_out_date: record.check_out_date,
        status: record.status,
        quote: StayQuoteResponse::from_breakdown(&breakdown, currency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{json_body, lazy_state};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn quote_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/pricing/quote")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_quote_stay_route() {
        let app = router().with_state(lazy_state());

        let response = app
            .oneshot(quote_request(
                r#"{"base_rate": 1000, "nights": 3, "number_of_rooms": 2, "discount_percent": 10, "advance_paid": 500}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["subtotal"]["amount"], "6000.00");
        assert_eq!(json["discount_amount"]["amount"], "600.00");
        assert_eq!(json["total"]["amount"], "5400.00");
        assert_eq!(json["balance_due"]["amount"], "4900.00");
        assert_eq!(json["total"]["currency"], "USD");
    }

    #[tokio::test]
    async fn test_quote_stay_route_same_day_and_currency() {
        let app = router().with_state(lazy_state());

        let response = app
            .oneshot(quote_request(
                r#"{"rate": "80", "checkInDate": "2024-07-01", "checkOutDate": "2024-07-01", "currency": "EUR"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["nights"], 1);
        assert_eq!(json["number_of_rooms"], 1);
        assert_eq!(json["total"]["amount"], "80.00");
        assert_eq!(json["total"]["currency"], "EUR");
    }

    #[tokio::test]
    async fn test_quote_stay_route_huge_inputs_still_quote() {
        let app = router().with_state(lazy_state());

        let response = app
            .oneshot(quote_request(
                r#"{"base_rate": 1000000000000, "nights": 1000000000000, "number_of_rooms": 1000000, "discount_percent": 10}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        let subtotal = json["subtotal"]["amount"].as_str().unwrap();
        assert!(subtotal.starts_with(&rust_decimal::Decimal::MAX.to_string()));
    }

    #[tokio::test]
    async fn test_quote_stay_route_rejects_missing_rate() {
        let app = router().with_state(lazy_state());

        let response = app
            .oneshot(quote_request(r#"{"nights": 2}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
