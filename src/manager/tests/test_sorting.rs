use super::*;

#[test]
fn test_sort_descending_by_availability() {
    let mut manager = ReservationManager::new();
    manager.add_restaurant("A", 3).unwrap();
    manager.add_restaurant("B", 5).unwrap();
    manager.add_restaurant("C", 4).unwrap();

    manager.sort_restaurants_by_availability(christmas());

    assert_eq!(names(&manager), vec!["B", "C", "A"]);
}

#[test]
fn test_sort_ties_keep_insertion_order() {
    let mut manager = create_test_manager();

    // A has 10 free, B has 5: order already descending, and an all-free tie
    // on a smaller fixture must not reorder either
    manager.sort_restaurants_by_availability(christmas());
    assert_eq!(names(&manager), vec!["A", "B"]);

    let mut tied = ReservationManager::new();
    tied.add_restaurant("X", 4).unwrap();
    tied.add_restaurant("Y", 4).unwrap();
    tied.add_restaurant("Z", 4).unwrap();
    tied.sort_restaurants_by_availability(christmas());
    assert_eq!(names(&tied), vec!["X", "Y", "Z"]);
}

#[test]
fn test_sort_follows_bookings() {
    let mut manager = create_test_manager();

    // Book 7 of A's 10 tables: A drops to 3 free, below B's 5
    for table_number in 0..7 {
        manager.book_table("A", christmas(), table_number).unwrap();
    }
    manager.sort_restaurants_by_availability(christmas());

    assert_eq!(names(&manager), vec!["B", "A"]);

    // On a date with no bookings the original counts apply again
    manager.sort_restaurants_by_availability(date(2024, 1, 1));
    assert_eq!(names(&manager), vec!["A", "B"]);
}

#[test]
fn test_sort_is_idempotent() {
    let mut manager = create_test_manager();
    manager.book_table("A", christmas(), 0).unwrap();

    manager.sort_restaurants_by_availability(christmas());
    let once = names(&manager)
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    manager.sort_restaurants_by_availability(christmas());
    assert_eq!(names(&manager), once);
}

#[test]
fn test_free_table_listing_reflects_sorted_order() {
    let mut manager = ReservationManager::new();
    manager.add_restaurant("Small", 1).unwrap();
    manager.add_restaurant("Big", 2).unwrap();

    manager.sort_restaurants_by_availability(christmas());
    let free = manager.find_all_free_tables(christmas());

    assert_eq!(
        free,
        vec!["Big - Table 1", "Big - Table 2", "Small - Table 1"]
    );
}
