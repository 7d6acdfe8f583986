//! Database queries for rooms, bookings and reservations

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Room, RoomCategory, StayRecord};

/// Get all rooms, with category name and base rate
pub async fn list_rooms(pool: &PgPool) -> Result<Vec<Room>> {
    let rooms = sqlx::query_as::<_, Room>(
        r#"
        SELECT
            r.id,
            r.room_number,
            c.name AS category_name,
            c.base_rate AS category_base_rate,
            r.price,
            r.status,
            r.booked_till_date,
            COALESCE(r.reserved_dates, '{}') AS reserved_dates
        FROM rooms r
        LEFT JOIN room_categories c ON r.category_id = c.id
        ORDER BY r.room_number
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

/// Get a single room by id
pub async fn get_room(pool: &PgPool, room_id: Uuid) -> Result<Option<Room>> {
    let room = sqlx::query_as::<_, Room>(
        r#"
        SELECT
            r.id,
            r.room_number,
            c.name AS category_name,
            c.base_rate AS category_base_rate,
            r.price,
            r.status,
            r.booked_till_date,
            COALESCE(r.reserved_dates, '{}') AS reserved_dates
        FROM rooms r
        LEFT JOIN room_categories c ON r.category_id = c.id
        WHERE r.id = $1
        "#,
    )
    .bind(room_id)
    .fetch_optional(pool)
    .await?;

    Ok(room)
}

/// Get all room categories
pub async fn list_room_categories(pool: &PgPool) -> Result<Vec<RoomCategory>> {
    let categories = sqlx::query_as::<_, RoomCategory>(
        r#"
        SELECT id, name, base_rate
        FROM room_categories
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

/// Get a booking with its guest and room
pub async fn get_booking(pool: &PgPool, booking_id: Uuid) -> Result<Option<StayRecord>> {
    let booking = sqlx::query_as::<_, StayRecord>(
        r#"
        SELECT
            b.id,
            g.name AS guest_name,
            g.phone AS guest_phone,
            b.room_id,
            r.room_number,
            b.check_in_date,
            b.check_out_date,
            b.rate,
            b.days,
            b.number_of_rooms,
            b.discount_percent,
            b.advance_paid,
            b.status,
            b.created_at
        FROM bookings b
        LEFT JOIN guests g ON b.guest_id = g.id
        LEFT JOIN rooms r ON b.room_id = r.id
        WHERE b.id = $1
        "#,
    )
    .bind(booking_id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

/// Get a reservation with its guest and room
pub async fn get_reservation(pool: &PgPool, reservation_id: Uuid) -> Result<Option<StayRecord>> {
    let reservation = sqlx::query_as::<_, StayRecord>(
        r#"
        SELECT
            v.id,
            g.name AS guest_name,
            g.phone AS guest_phone,
            v.room_id,
            r.room_number,
            v.check_in_date,
            v.check_out_date,
            v.rate,
            v.days,
            v.number_of_rooms,
            v.discount_percent,
            v.upfront_payment AS advance_paid,
            v.status,
            v.created_at
        FROM reservations v
        LEFT JOIN guests g ON v.guest_id = g.id
        LEFT JOIN rooms r ON v.room_id = r.id
        WHERE v.id = $1
        "#,
    )
    .bind(reservation_id)
    .fetch_optional(pool)
    .await?;

    Ok(reservation)
}
