//! Pricing service functions with database access.
//!
//! These look up rooms, bookings and reservations and feed them through the
//! pure calculators.

use sqlx::PgPool;
use uuid::Uuid;

use crate::availability::{stay_conflicts, StayConflict};
use crate::cache::AppCache;
use crate::db;
use crate::error::Result;
use crate::models::{FolioKind, Room, StayRecord};

use super::calculators::{calculate_stay_price, StayPriceBreakdown, StayPriceInput};
use super::requests::QuoteRoomRequest;

/// Result of quoting a stay in a specific room
#[derive(Debug, Clone)]
pub struct RoomQuoteResult {
    pub room: Room,
    pub breakdown: StayPriceBreakdown,
    pub conflicts: Vec<StayConflict>,
}

/// Result of re-deriving a stored booking or reservation
#[derive(Debug, Clone)]
pub struct FolioResult {
    pub kind: FolioKind,
    pub record: StayRecord,
    pub breakdown: StayPriceBreakdown,
}

/// Pricing service error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    #[error("Room {0} not found")]
    RoomNotFound(Uuid),

    #[error("Booking {0} not found")]
    BookingNotFound(Uuid),

    #[error("Reservation {0} not found")]
    ReservationNotFound(Uuid),

    #[error("No rate configured for room {room_id} or its category")]
    MissingRate { room_id: Uuid },
}

/// Quote a stay in a room at the room's nightly rate.
///
/// The room's own price is used, falling back to its category's base rate.
/// Nights of the stay that are already booked or reserved are reported as
/// conflicts; they do not prevent the quote.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `cache` - Application cache (for room lookup)
/// * `room_id` - UUID of the room
/// * `request` - Stay dates, room count, discount and advance
pub async fn quote_room_stay(
    pool: &PgPool,
    cache: &AppCache,
    room_id: Uuid,
    request: &QuoteRoomRequest,
) -> Result<RoomQuoteResult> {
    let room = cache
        .room(pool, room_id)
        .await?
        .ok_or(PricingError::RoomNotFound(room_id))?;

    let base_rate = room
        .nightly_rate()
        .ok_or(PricingError::MissingRate { room_id })?;

    let breakdown = calculate_stay_price(&StayPriceInput {
        base_rate,
        check_in: request.check_in_date,
        check_out: request.check_out_date,
        nights: None,
        number_of_rooms: request.number_of_rooms,
        discount_percent: request.discount_percent.unwrap_or_default(),
        advance_paid: request.advance_paid.unwrap_or_default(),
    });

    let conflicts = match (request.check_in_date, request.check_out_date) {
        (Some(check_in), Some(check_out)) => {
            stay_conflicts(&room.availability_record(), check_in, check_out)
        }
        (Some(check_in), None) => {
            stay_conflicts(&room.availability_record(), check_in, check_in)
        }
        _ => Vec::new(),
    };

    if !conflicts.is_empty() {
        tracing::debug!(
            "Room {} has {} conflicting night(s) for requested stay",
            room.room_number,
            conflicts.len()
        );
    }

    Ok(RoomQuoteResult {
        room: (*room).clone(),
        breakdown,
        conflicts,
    })
}

/// Re-derive the figures of a stored booking.
pub async fn booking_folio(
    pool: &PgPool,
    cache: &AppCache,
    booking_id: Uuid,
) -> Result<FolioResult> {
    let record = db::get_booking(pool, booking_id)
        .await?
        .ok_or(PricingError::BookingNotFound(booking_id))?;

    folio(pool, cache, FolioKind::Booking, record).await
}

/// Re-derive the figures of a stored reservation.
pub async fn reservation_folio(
    pool: &PgPool,
    cache: &AppCache,
    reservation_id: Uuid,
) -> Result<FolioResult> {
    let record = db::get_reservation(pool, reservation_id)
        .await?
        .ok_or(PricingError::ReservationNotFound(reservation_id))?;

    folio(pool, cache, FolioKind::Reservation, record).await
}

/// Records saved without a rate are priced at their room's current rate.
async fn folio(
    pool: &PgPool,
    cache: &AppCache,
    kind: FolioKind,
    record: StayRecord,
) -> Result<FolioResult> {
    let fallback_rate = match (record.rate, record.room_id) {
        (None, Some(room_id)) => cache
            .room(pool, room_id)
            .await?
            .and_then(|room| room.nightly_rate()),
        _ => None,
    };

    let input = record
        .price_input(fallback_rate)
        .ok_or(PricingError::MissingRate {
            room_id: record.room_id.unwrap_or_default(),
        })?;

    Ok(FolioResult {
        kind,
        breakdown: calculate_stay_price(&input),
        record,
    })
}
