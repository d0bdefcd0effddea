//! ReservationManager - Restaurant list ownership and booking operations
//!
//! This module handles:
//! - Registering restaurants with a fixed table count
//! - Booking a table for a calendar date
//! - Listing free tables across all restaurants
//! - Reordering restaurants by availability
//!
//! # Booking Flow
//!
//! ```text
//! book_table(name, date, table_number)
//!     ├─ 1. Resolve restaurant by name (first exact match)
//!     ├─ 2. Validate table_number against the table count
//!     ├─ 3. Delegate to the table's book(date)
//!     └─ 4. Return true (newly booked) / false (already booked)
//! ```

mod error;
pub use error::*;

use crate::models::Restaurant;
use chrono::NaiveDate;
use std::cmp::Reverse;

/// Single owner of the restaurant sequence.
///
/// Restaurants keep insertion order until
/// [`sort_restaurants_by_availability`](Self::sort_restaurants_by_availability)
/// reorders them. All state lives in memory for the session; operations are
/// synchronous and sequential.
#[derive(Debug, Clone, Default)]
pub struct ReservationManager {
    restaurants: Vec<Restaurant>,
}

impl ReservationManager {
    /// Create a manager with no restaurants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a restaurant with `table_count` fresh empty tables.
    ///
    /// Fails with [`ReservationError::EmptyRestaurantName`] or
    /// [`ReservationError::InvalidTableCount`] without appending anything.
    /// Duplicate names are allowed; name lookups resolve to the earliest
    /// registration.
    pub fn add_restaurant(
        &mut self,
        name: impl Into<String>,
        table_count: usize,
    ) -> ReservationResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(ReservationError::EmptyRestaurantName);
        }
        if table_count == 0 {
            return Err(ReservationError::InvalidTableCount(table_count));
        }

        tracing::info!(restaurant = %name, table_count, "Restaurant added");
        self.restaurants.push(Restaurant::new(name, table_count));
        Ok(())
    }

    /// Read-only view of the restaurants in their current order.
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// First restaurant with exactly this name, if any.
    pub fn restaurant(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.name() == name)
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Labels for every table free on `date`, in (restaurant order, table
    /// order). Table numbers are displayed 1-based.
    pub fn find_all_free_tables(&self, date: NaiveDate) -> Vec<String> {
        let mut free_tables = Vec::new();
        for restaurant in &self.restaurants {
            for (i, table) in restaurant.tables().iter().enumerate() {
                if !table.is_booked(date) {
                    free_tables.push(format!("{} - Table {}", restaurant.name(), i + 1));
                }
            }
        }
        tracing::debug!(date = %date, count = free_tables.len(), "Free table lookup");
        free_tables
    }

    /// Book table `table_number` (zero-based) at `restaurant_name` for `date`.
    ///
    /// Returns `Ok(true)` if the date was newly booked, `Ok(false)` if that
    /// table was already booked on that date. Fails with
    /// [`ReservationError::RestaurantNotFound`] or
    /// [`ReservationError::TableOutOfRange`] leaving every table untouched.
    pub fn book_table(
        &mut self,
        restaurant_name: &str,
        date: NaiveDate,
        table_number: usize,
    ) -> ReservationResult<bool> {
        let restaurant = self
            .restaurants
            .iter_mut()
            .find(|r| r.name() == restaurant_name)
            .ok_or_else(|| ReservationError::RestaurantNotFound(restaurant_name.to_string()))?;

        let table_count = restaurant.table_count();
        let table = restaurant.table_mut(table_number).ok_or_else(|| {
            ReservationError::TableOutOfRange {
                restaurant: restaurant_name.to_string(),
                table_number,
                table_count,
            }
        })?;

        let booked = table.book(date);
        tracing::info!(
            restaurant = %restaurant_name,
            table_number,
            date = %date,
            booked,
            "Book table"
        );
        Ok(booked)
    }

    /// Number of tables in `restaurant` not booked on `date`.
    pub fn count_available_tables(&self, restaurant: &Restaurant, date: NaiveDate) -> usize {
        restaurant.count_available_tables(date)
    }

    /// Reorder restaurants in place, descending by availability on `date`.
    ///
    /// Stable: restaurants with equal availability keep their prior relative
    /// order. Counts are computed once per restaurant.
    pub fn sort_restaurants_by_availability(&mut self, date: NaiveDate) {
        self.restaurants
            .sort_by_cached_key(|r| Reverse(r.count_available_tables(date)));
        tracing::debug!(date = %date, "Restaurants sorted by availability");
    }
}

#[cfg(test)]
mod tests;
