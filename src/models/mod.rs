//! Data models
//!
//! Owned exclusively by the [`crate::manager::ReservationManager`]; all
//! mutation goes through it. Dates are `chrono::NaiveDate` (calendar-day
//! granularity, no timezone).

pub mod restaurant;
pub mod table;

// Re-exports
pub use restaurant::*;
pub use table::*;
