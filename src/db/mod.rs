//! Database access (read-only) for the hotel backend's tables

pub mod queries;

pub use queries::*;
