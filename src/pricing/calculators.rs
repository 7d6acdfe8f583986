//! Core pricing calculation functions.
//!
//! Pure functions for stay pricing - no database access.
//! Nothing here fails: missing or out-of-range inputs are clamped to safe
//! fallbacks and every figure is re-derived from scratch on each call.

use chrono::{Days, NaiveDate};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Only applied when a figure is presented. The stay calculation itself
/// carries full precision from subtotal through balance due.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use frontdesk_engine::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Number of nights between check-in and check-out.
///
/// Returns 1 when either date is missing or when check-out is not after
/// check-in. Never returns zero or a negative count.
pub fn count_nights(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> i64 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => {
            let nights = (check_out - check_in).num_days();
            if nights > 0 {
                nights
            } else {
                1
            }
        }
        _ => 1,
    }
}

/// Number of rooms on a booking; missing or non-positive counts become 1.
pub fn normalize_room_count(number_of_rooms: Option<i64>) -> i64 {
    match number_of_rooms {
        Some(n) if n >= 1 => n,
        _ => 1,
    }
}

/// Clamp a discount percentage into `[0, 100]`.
pub fn clamp_discount_percent(discount_percent: Decimal) -> Decimal {
    discount_percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Calendar dates occupied by a stay: check-in inclusive, check-out exclusive.
///
/// A stay whose check-out is not after check-in still occupies its
/// check-in date, matching the single night charged by [`count_nights`].
pub fn nightly_dates(check_in: NaiveDate, check_out: NaiveDate) -> Vec<NaiveDate> {
    let nights = count_nights(Some(check_in), Some(check_out));
    (0..nights)
        .filter_map(|offset| u64::try_from(offset).ok())
        .filter_map(|offset| check_in.checked_add_days(Days::new(offset)))
        .collect()
}

/// Inputs to a stay price calculation.
#[derive(Debug, Clone, Default)]
pub struct StayPriceInput {
    pub base_rate: Decimal,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// Overrides the night count derived from the dates when at least 1.
    pub nights: Option<i64>,
    pub number_of_rooms: Option<i64>,
    pub discount_percent: Decimal,
    pub advance_paid: Decimal,
}

/// Derived stay figures, unrounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayPriceBreakdown {
    pub base_rate: Decimal,
    pub nights: i64,
    pub number_of_rooms: i64,
    pub discount_percent: Decimal,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
    pub advance_paid: Decimal,
    /// Negative when the guest has overpaid.
    pub balance_due: Decimal,
}

/// Calculate subtotal, discount, total and balance due for a stay.
///
/// Figures are derived in dependency order:
/// subtotal = rate × nights × rooms, discount = subtotal × percent / 100,
/// total = subtotal − discount, balance due = total − advance.
pub fn calculate_stay_price(input: &StayPriceInput) -> StayPriceBreakdown {
    let base_rate = input.base_rate.max(Decimal::ZERO);
    let nights = match input.nights {
        Some(n) if n >= 1 => n,
        _ => count_nights(input.check_in, input.check_out),
    };
    let number_of_rooms = normalize_room_count(input.number_of_rooms);
    let discount_percent = clamp_discount_percent(input.discount_percent);
    let advance_paid = input.advance_paid.max(Decimal::ZERO);

    // Saturates at Decimal::MAX instead of panicking on absurd inputs
    let subtotal = base_rate
        .saturating_mul(Decimal::from(nights))
        .saturating_mul(Decimal::from(number_of_rooms));
    let discount_amount = match subtotal.checked_mul(discount_percent) {
        Some(scaled) => scaled / Decimal::ONE_HUNDRED,
        None => subtotal / Decimal::ONE_HUNDRED * discount_percent,
    };
    // Both operands are non-negative, so neither subtraction can overflow
    let total = subtotal - discount_amount;
    let balance_due = total - advance_paid;

    StayPriceBreakdown {
        base_rate,
        nights,
        number_of_rooms,
        discount_percent,
        subtotal,
        discount_amount,
        total,
        advance_paid,
        balance_due,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(2.25), 1), dec!(2.2));
        assert_eq!(round_money(dec!(2.35), 1), dec!(2.4));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(-1.234), 2), dec!(-1.23));
        assert_eq!(round_money(dec!(999999.995), 2), dec!(1000000.00));
    }

    // ==================== count_nights tests ====================

    #[test]
    fn test_count_nights_whole_days() {
        assert_eq!(count_nights(Some(date("2024-07-01")), Some(date("2024-07-04"))), 3);
        assert_eq!(count_nights(Some(date("2024-07-31")), Some(date("2024-08-01"))), 1);
        assert_eq!(count_nights(Some(date("2024-02-28")), Some(date("2024-03-01"))), 2);
    }

    #[test]
    fn test_count_nights_same_day_falls_back_to_one() {
        assert_eq!(count_nights(Some(date("2024-07-01")), Some(date("2024-07-01"))), 1);
    }

    #[test]
    fn test_count_nights_inverted_dates_fall_back_to_one() {
        assert_eq!(count_nights(Some(date("2024-07-05")), Some(date("2024-07-01"))), 1);
    }

    #[test]
    fn test_count_nights_missing_dates() {
        assert_eq!(count_nights(None, Some(date("2024-07-01"))), 1);
        assert_eq!(count_nights(Some(date("2024-07-01")), None), 1);
        assert_eq!(count_nights(None, None), 1);
    }

    // ==================== input normalisation tests ====================

    #[test]
    fn test_normalize_room_count() {
        assert_eq!(normalize_room_count(Some(3)), 3);
        assert_eq!(normalize_room_count(Some(0)), 1);
        assert_eq!(normalize_room_count(Some(-2)), 1);
        assert_eq!(normalize_room_count(None), 1);
    }

    #[test]
    fn test_clamp_discount_percent() {
        assert_eq!(clamp_discount_percent(dec!(12.5)), dec!(12.5));
        assert_eq!(clamp_discount_percent(dec!(-5)), dec!(0));
        assert_eq!(clamp_discount_percent(dec!(150)), dec!(100));
    }

    #[test]
    fn test_nightly_dates() {
        let nights = nightly_dates(date("2024-07-30"), date("2024-08-02"));
        assert_eq!(
            nights,
            vec![date("2024-07-30"), date("2024-07-31"), date("2024-08-01")]
        );

        // Same-day stays still occupy the check-in date
        assert_eq!(nightly_dates(date("2024-07-01"), date("2024-07-01")), vec![date("2024-07-01")]);
    }

    // ==================== calculate_stay_price tests ====================

    #[test]
    fn test_stay_price_front_desk_scenario() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(1000),
            nights: Some(3),
            number_of_rooms: Some(2),
            discount_percent: dec!(10),
            advance_paid: dec!(500),
            ..Default::default()
        });

        assert_eq!(breakdown.subtotal, dec!(6000));
        assert_eq!(breakdown.discount_amount, dec!(600));
        assert_eq!(breakdown.total, dec!(5400));
        assert_eq!(breakdown.balance_due, dec!(4900));
    }

    #[test]
    fn test_stay_price_nights_from_dates() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(89.90),
            check_in: Some(date("2024-07-01")),
            check_out: Some(date("2024-07-05")),
            number_of_rooms: Some(1),
            ..Default::default()
        });

        assert_eq!(breakdown.nights, 4);
        assert_eq!(breakdown.subtotal, dec!(359.60));
    }

    #[test]
    fn test_stay_price_same_day_charges_one_night() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(120),
            check_in: Some(date("2024-07-01")),
            check_out: Some(date("2024-07-01")),
            ..Default::default()
        });

        assert_eq!(breakdown.nights, 1);
        assert_eq!(breakdown.number_of_rooms, 1);
        assert_eq!(breakdown.total, dec!(120));
    }

    #[test]
    fn test_stay_price_zero_discount_keeps_subtotal() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(75.25),
            nights: Some(2),
            number_of_rooms: Some(3),
            ..Default::default()
        });

        assert_eq!(breakdown.discount_amount, dec!(0));
        assert_eq!(breakdown.total, breakdown.subtotal);
    }

    #[test]
    fn test_stay_price_full_discount_is_free() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(250),
            nights: Some(2),
            discount_percent: dec!(100),
            ..Default::default()
        });

        assert_eq!(breakdown.total, dec!(0));
    }

    #[test]
    fn test_stay_price_overpayment_is_negative_balance() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(100),
            nights: Some(1),
            advance_paid: dec!(150),
            ..Default::default()
        });

        assert_eq!(breakdown.balance_due, dec!(-50));
    }

    #[test]
    fn test_stay_price_keeps_full_precision() {
        // 33.333 * 3 = 99.999; 7% of that is 6.99993
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(33.333),
            nights: Some(3),
            discount_percent: dec!(7),
            ..Default::default()
        });

        assert_eq!(breakdown.subtotal, dec!(99.999));
        assert_eq!(breakdown.discount_amount, dec!(6.99993));
        assert_eq!(breakdown.total, dec!(92.99907));
        assert_eq!(round_money(breakdown.total, 2), dec!(93.00));
    }

    #[test]
    fn test_stay_price_saturates_instead_of_overflowing() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(1_000_000_000_000),
            nights: Some(1_000_000_000_000),
            number_of_rooms: Some(1_000_000),
            discount_percent: dec!(10),
            advance_paid: dec!(500),
            ..Default::default()
        });

        assert_eq!(breakdown.subtotal, Decimal::MAX);
        assert!(breakdown.discount_amount > Decimal::ZERO);
        assert!(breakdown.total < breakdown.subtotal);
        assert_eq!(breakdown.balance_due, breakdown.total - dec!(500));
    }

    #[test]
    fn test_stay_price_extreme_counts_without_discount() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: Decimal::MAX,
            nights: Some(i64::MAX),
            number_of_rooms: Some(i64::MAX),
            discount_percent: dec!(100),
            ..Default::default()
        });

        assert_eq!(breakdown.subtotal, Decimal::MAX);
        assert!(breakdown.total.abs() < dec!(1));
    }

    #[test]
    fn test_stay_price_clamps_invalid_inputs() {
        let breakdown = calculate_stay_price(&StayPriceInput {
            base_rate: dec!(-10),
            nights: Some(0),
            number_of_rooms: Some(0),
            discount_percent: dec!(-20),
            advance_paid: dec!(-5),
            ..Default::default()
        });

        assert_eq!(breakdown.base_rate, dec!(0));
        assert_eq!(breakdown.nights, 1);
        assert_eq!(breakdown.number_of_rooms, 1);
        assert_eq!(breakdown.discount_percent, dec!(0));
        assert_eq!(breakdown.advance_paid, dec!(0));
        assert_eq!(breakdown.balance_due, dec!(0));
    }
}
