//! Booking and reservation models
//!
//! Bookings and reservations share one row shape; the reservation query
//! aliases `upfront_payment` to `advance_paid`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::pricing::calculators::StayPriceInput;

/// Which table a stay record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FolioKind {
    Booking,
    Reservation,
}

impl FolioKind {
    pub fn label(self) -> &'static str {
        match self {
            FolioKind::Booking => "Booking",
            FolioKind::Reservation => "Reservation",
        }
    }
}

/// Booking from bookings, or reservation from reservations, joined with guest and room
#[derive(Debug, Clone, FromRow)]
pub struct StayRecord {
    pub id: Uuid,
    pub guest_name: Option<String>,
    pub guest_phone: Option<String>,
    pub room_id: Option<Uuid>,
    pub room_number: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub rate: Option<Decimal>,
    pub days: Option<i32>,
    pub number_of_rooms: Option<i32>,
    pub discount_percent: Option<Decimal>,
    pub advance_paid: Option<Decimal>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl StayRecord {
    /// Pricing inputs as stored. A stored day count below 1 is ignored in
    /// favour of the stay dates.
    pub fn price_input(&self, fallback_rate: Option<Decimal>) -> Option<StayPriceInput> {
        let base_rate = self.rate.or(fallback_rate)?;
        Some(StayPriceInput {
            base_rate,
            check_in: self.check_in_date,
            check_out: self.check_out_date,
            nights: self.days.map(i64::from),
            number_of_rooms: self.number_of_rooms.map(i64::from),
            discount_percent: self.discount_percent.unwrap_or_default(),
            advance_paid: self.advance_paid.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculators::calculate_stay_price;
    use rust_decimal_macros::dec;

    fn record() -> StayRecord {
        StayRecord {
            id: Uuid::new_v4(),
            guest_name: Some("A. Guest".to_string()),
            guest_phone: None,
            room_id: None,
            room_number: Some("101".to_string()),
            check_in_date: NaiveDate::from_ymd_opt(2024, 7, 1),
            check_out_date: NaiveDate::from_ymd_opt(2024, 7, 4),
            rate: Some(dec!(1000)),
            days: None,
            number_of_rooms: Some(2),
            discount_percent: Some(dec!(10)),
            advance_paid: Some(dec!(500)),
            status: Some("confirmed".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_price_input_from_dates() {
        let breakdown = calculate_stay_price(&record().price_input(None).unwrap());
        assert_eq!(breakdown.nights, 3);
        assert_eq!(breakdown.balance_due, dec!(4900));
    }

    #[test]
    fn test_price_input_prefers_stored_days() {
        let mut record = record();
        record.days = Some(5);
        assert_eq!(calculate_stay_price(&record.price_input(None).unwrap()).nights, 5);

        record.days = Some(0);
        assert_eq!(calculate_stay_price(&record.price_input(None).unwrap()).nights, 3);
    }

    #[test]
    fn test_price_input_rate_fallback() {
        let mut record = record();
        record.rate = None;
        assert!(record.price_input(None).is_none());

        let input = record.price_input(Some(dec!(80))).unwrap();
        assert_eq!(input.base_rate, dec!(80));
    }

    #[test]
    fn test_price_input_missing_optional_figures() {
        let mut record = record();
        record.number_of_rooms = None;
        record.discount_percent = None;
        record.advance_paid = None;

        let breakdown = calculate_stay_price(&record.price_input(None).unwrap());
        assert_eq!(breakdown.number_of_rooms, 1);
        assert_eq!(breakdown.total, dec!(3000));
        assert_eq!(breakdown.balance_due, dec!(3000));
    }
}
