//! Request DTOs for pricing API endpoints.
//!
//! Field names follow the API's snake_case; the dashboard's camelCase names
//! and the backend's legacy names are accepted as aliases.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::dates::calendar_date_option;

/// Request to quote a stay at an explicit rate
#[derive(Debug, Deserialize)]
pub struct QuoteStayRequest {
    #[serde(alias = "baseRate", alias = "rate", alias = "price")]
    pub base_rate: Decimal,
    #[serde(default, alias = "checkInDate", with = "calendar_date_option")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default, alias = "checkOutDate", with = "calendar_date_option")]
    pub check_out_date: Option<NaiveDate>,
    /// Explicit night count, used instead of the dates when at least 1
    #[serde(default, alias = "days", deserialize_with = "lenient_count")]
    pub nights: Option<i64>,
    #[serde(default, alias = "numberOfRooms", deserialize_with = "lenient_count")]
    pub number_of_rooms: Option<i64>,
    #[serde(default, alias = "discountPercent")]
    pub discount_percent: Option<Decimal>,
    #[serde(default, alias = "advancePaid", alias = "upfrontPayment")]
    pub advance_paid: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request to quote a stay in a specific room at the room's own rate
#[derive(Debug, Deserialize)]
pub struct QuoteRoomRequest {
    #[serde(default, alias = "checkInDate", with = "calendar_date_option")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default, alias = "checkOutDate", with = "calendar_date_option")]
    pub check_out_date: Option<NaiveDate>,
    #[serde(default, alias = "numberOfRooms", deserialize_with = "lenient_count")]
    pub number_of_rooms: Option<i64>,
    #[serde(default, alias = "discountPercent")]
    pub discount_percent: Option<Decimal>,
    #[serde(default, alias = "advancePaid", alias = "upfrontPayment")]
    pub advance_paid: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Accept a count as a JSON number or numeric string; anything else is `None`.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_request_snake_case() {
        let request: QuoteStayRequest = serde_json::from_str(
            r#"{
                "base_rate": "1000",
                "check_in_date": "2024-07-01",
                "check_out_date": "2024-07-04",
                "number_of_rooms": 2,
                "discount_percent": 10,
                "advance_paid": "500"
            }"#,
        )
        .unwrap();

        assert_eq!(request.base_rate, dec!(1000));
        assert_eq!(request.check_in_date, NaiveDate::from_ymd_opt(2024, 7, 1));
        assert_eq!(request.number_of_rooms, Some(2));
        assert_eq!(request.discount_percent, Some(dec!(10)));
        assert_eq!(request.advance_paid, Some(dec!(500)));
        assert_eq!(request.nights, None);
    }

    #[test]
    fn test_quote_request_dashboard_aliases() {
        let request: QuoteStayRequest = serde_json::from_str(
            r#"{
                "rate": 89.5,
                "checkInDate": "2024-07-01T12:00:00.000Z",
                "days": "3",
                "numberOfRooms": "two",
                "upfrontPayment": 20
            }"#,
        )
        .unwrap();

        assert_eq!(request.base_rate, dec!(89.5));
        assert_eq!(request.check_in_date, NaiveDate::from_ymd_opt(2024, 7, 1));
        assert_eq!(request.check_out_date, None);
        assert_eq!(request.nights, Some(3));
        assert_eq!(request.number_of_rooms, None);
        assert_eq!(request.advance_paid, Some(dec!(20)));
    }

    #[test]
    fn test_room_quote_request_empty_body() {
        let request: QuoteRoomRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.check_in_date, None);
        assert_eq!(request.number_of_rooms, None);
        assert_eq!(request.currency, None);
    }
}
