//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::availability::StayConflict;
use crate::models::FolioKind;

use super::calculators::{round_money, StayPriceBreakdown};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    /// Money rounded to cents for presentation, always two decimal places
    pub fn rounded(amount: Decimal, currency: &str) -> Self {
        let mut amount = round_money(amount, 2);
        amount.rescale(2);
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Response for a stay quote
#[derive(Debug, Clone, Serialize)]
pub struct StayQuoteResponse {
    pub nights: i64,
    pub number_of_rooms: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_percent: Decimal,
    pub base_rate: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub discount_amount: MoneyResponse,
    pub total: MoneyResponse,
    pub advance_paid: MoneyResponse,
    pub balance_due: MoneyResponse,
}

impl StayQuoteResponse {
    pub fn from_breakdown(breakdown: &StayPriceBreakdown, currency: &str) -> Self {
        Self {
            nights: breakdown.nights,
            number_of_rooms: breakdown.number_of_rooms,
            discount_percent: breakdown.discount_percent.normalize(),
            base_rate: MoneyResponse::rounded(breakdown.base_rate, currency),
            subtotal: MoneyResponse::rounded(breakdown.subtotal, currency),
            discount_amount: MoneyResponse::rounded(breakdown.discount_amount, currency),
            total: MoneyResponse::rounded(breakdown.total, currency),
            advance_paid: MoneyResponse::rounded(breakdown.advance_paid, currency),
            balance_due: MoneyResponse::rounded(breakdown.balance_due, currency),
        }
    }
}

/// Response for a room quote
#[derive(Debug, Serialize)]
pub struct RoomQuoteResponse {
    pub room_id: Uuid,
    pub room_number: String,
    pub category_name: Option<String>,
    /// False when any night of the stay is booked or reserved
    pub available: bool,
    pub conflicts: Vec<StayConflict>,
    pub quote: StayQuoteResponse,
}

/// Response for a booking or reservation folio
#[derive(Debug, Serialize)]
pub struct FolioResponse {
    pub kind: FolioKind,
    pub id: Uuid,
    pub guest_name: Option<String>,
    pub guest_phone: Option<String>,
    pub room_number: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub quote: StayQuoteResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculators::{calculate_stay_price, StayPriceInput};
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_response_rounds_for_presentation() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(33.333),
            nights: Some(3),
            discount_percent: dec!(7),
            ..Default::default()
        });
        let response = StayQuoteResponse::from_breakdown(&breakdown, "USD");

        assert_eq!(response.base_rate.amount, dec!(33.33));
        assert_eq!(response.subtotal.amount, dec!(100.00));
        assert_eq!(response.discount_amount.amount, dec!(7.00));
        assert_eq!(response.total.amount, dec!(93.00));
        assert_eq!(response.total.currency, "USD");
    }

    #[test]
    fn test_quote_response_json_shape() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(1000),
            nights: Some(3),
            number_of_rooms: Some(2),
            discount_percent: dec!(10),
            advance_paid: dec!(500),
            ..Default::default()
        });
        let json = serde_json::to_value(StayQuoteResponse::from_breakdown(&breakdown, "USD")).unwrap();

        assert_eq!(json["nights"], 3);
        assert_eq!(json["number_of_rooms"], 2);
        assert_eq!(json["discount_percent"], "10");
        assert_eq!(json["subtotal"]["amount"], "6000.00");
        assert_eq!(json["discount_amount"]["amount"], "600.00");
        assert_eq!(json["balance_due"]["amount"], "4900.00");
        assert_eq!(json["balance_due"]["currency"], "USD");
    }
}
