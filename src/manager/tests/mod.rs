use super::*;
use chrono::NaiveDate;

mod test_sorting;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn christmas() -> NaiveDate {
    date(2023, 12, 25)
}

// ========================================================================
// Helper: manager with the reference fixture ("A" 10 tables, "B" 5 tables)
// ========================================================================

fn create_test_manager() -> ReservationManager {
    let mut manager = ReservationManager::new();
    manager.add_restaurant("A", 10).unwrap();
    manager.add_restaurant("B", 5).unwrap();
    manager
}

fn names(manager: &ReservationManager) -> Vec<&str> {
    manager.restaurants().iter().map(|r| r.name()).collect()
}
