//! Pricing engine module for the front desk.
//!
//! Stay pricing (nights, subtotal, discount, total, balance due) for quotes
//! and for stored bookings and reservations.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    calculate_stay_price, count_nights, round_money, StayPriceBreakdown, StayPriceInput,
};
pub use routes::router;
pub use services::{FolioResult, PricingError, RoomQuoteResult};
