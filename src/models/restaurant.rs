//! Restaurant Model

use super::table::RestaurantTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named restaurant with a fixed sequence of tables.
///
/// The table sequence is assigned at construction and never resized; a
/// table's zero-based index is its stable public identifier. Internals are
/// private — callers get read-only views only, and all mutation goes through
/// [`crate::manager::ReservationManager`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    name: String,
    tables: Vec<RestaurantTable>,
}

impl Restaurant {
    /// Build a restaurant with `table_count` empty tables.
    ///
    /// Input validation (non-empty name, count >= 1) happens in the manager's
    /// `add_restaurant`; this constructor assumes it already passed.
    pub(crate) fn new(name: impl Into<String>, table_count: usize) -> Self {
        Self {
            name: name.into(),
            tables: vec![RestaurantTable::new(); table_count],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the table sequence, in index order.
    pub fn tables(&self) -> &[RestaurantTable] {
        &self.tables
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Table at the zero-based index, if in range.
    pub fn table(&self, index: usize) -> Option<&RestaurantTable> {
        self.tables.get(index)
    }

    pub(crate) fn table_mut(&mut self, index: usize) -> Option<&mut RestaurantTable> {
        self.tables.get_mut(index)
    }

    /// Number of tables not booked on `date`.
    pub fn count_available_tables(&self, date: NaiveDate) -> usize {
        self.tables.iter().filter(|t| !t.is_booked(date)).count()
    }
}
