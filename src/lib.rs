//! Reserva - restaurant table reservation tracking
//!
//! In-memory availability tracking for single-date table bookings across a
//! small set of restaurants. The [`ReservationManager`] owns the restaurant
//! list and exposes the whole operation surface: adding restaurants, booking
//! a table for a calendar date, listing free tables, and reordering
//! restaurants by availability.
//!
//! There is no persistence and no network surface; callers construct a
//! manager, drive it synchronously, and inspect the returned values.

pub mod manager;
pub mod models;

// Re-exports
pub use manager::{ErrorKind, ReservationError, ReservationManager, ReservationResult};
pub use models::{Restaurant, RestaurantTable};
