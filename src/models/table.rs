//! Restaurant Table Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single table and the set of dates it is booked on.
///
/// Bookings are permanent within a session: a date, once booked, is never
/// removed. A `BTreeSet` keeps the serialized form deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantTable {
    booked_dates: BTreeSet<NaiveDate>,
}

impl RestaurantTable {
    /// Create a table with no bookings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Book this table for `date`.
    ///
    /// Returns `true` if the date was newly recorded, `false` if the table
    /// was already booked on that date (no mutation in that case).
    pub fn book(&mut self, date: NaiveDate) -> bool {
        self.booked_dates.insert(date)
    }

    /// Whether this table is booked on `date`.
    pub fn is_booked(&self, date: NaiveDate) -> bool {
        self.booked_dates.contains(&date)
    }

    /// Dates this table is booked on, in ascending order.
    pub fn booked_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.booked_dates.iter().copied()
    }
}
