/// This file contains the unit tests for the `parking_lot.rs` module.
///
/// Each registry operation is tested in isolation against the behavior of
/// the command interface it backs. The end-to-end command transcripts live
/// in `tests/test_command_session.rs`; this module complements them.
#[cfg(test)]
mod tests {
    use crate::domain::parking_lot::ParkingLot;
    use crate::domain::plate::PlateParity;
    use crate::domain::vehicle::Vehicle;
    use crate::error::Error;

    // --- HELPER FUNCTIONS FOR TEST SETUP ---

    /// A helper to create a lot of the given capacity, or panic.
    fn lot(capacity: i64) -> ParkingLot {
        ParkingLot::new(capacity).expect("test lot must be creatable")
    }

    /// A helper to park a white car with the given registration.
    fn park_car(lot: &mut ParkingLot, registration_no: &str) -> usize {
        lot.park(Vehicle::new(registration_no, "White", "Car")).expect("lot must not be full")
    }

    #[test]
    fn test_create_rejects_non_positive_capacity() {
        assert!(matches!(ParkingLot::new(0), Err(Error::InvalidCapacity(0))));
        assert!(matches!(ParkingLot::new(-3), Err(Error::InvalidCapacity(-3))));
    }

    #[test]
    fn test_new_lot_is_empty() {
        let lot = lot(4);

        assert_eq!(lot.capacity(), 4);
        assert_eq!(lot.occupied_count(), 0);
        assert!(!lot.is_full());
        assert!(lot.status().is_empty(), "A fresh lot should have no occupied slots");
    }

    #[test]
    fn test_park_assigns_lowest_slot_first() {
        let mut lot = lot(3);

        assert_eq!(park_car(&mut lot, "KA-01-HH-0001"), 1);
        assert_eq!(park_car(&mut lot, "KA-01-HH-0002"), 2);
        assert_eq!(park_car(&mut lot, "KA-01-HH-0003"), 3);
    }

    #[test]
    fn test_park_on_full_lot_is_rejected_without_mutation() {
        let mut lot = lot(2);
        park_car(&mut lot, "KA-01-HH-0001");
        park_car(&mut lot, "KA-01-HH-0002");

        let before: Vec<(usize, Vehicle)> = lot.status().into_iter().map(|(slot_no, v)| (slot_no, v.clone())).collect();

        let result = lot.park(Vehicle::new("KA-01-HH-0003", "Red", "Car"));
        assert!(matches!(result, Err(Error::Full)));

        let after: Vec<(usize, Vehicle)> = lot.status().into_iter().map(|(slot_no, v)| (slot_no, v.clone())).collect();
        assert_eq!(before, after, "A rejected park must leave all slots unchanged");
    }

    #[test]
    fn test_park_reuses_lowest_vacated_slot() {
        let mut lot = lot(4);
        park_car(&mut lot, "KA-01-HH-0001");
        park_car(&mut lot, "KA-01-HH-0002");
        park_car(&mut lot, "KA-01-HH-0003");

        lot.leave(2).expect("slot 2 is in range");

        // First-fit: the vacated slot 2 wins over the never-used slot 4.
        assert_eq!(park_car(&mut lot, "KA-01-HH-0004"), 2);
        assert_eq!(park_car(&mut lot, "KA-01-HH-0005"), 4);
    }

    #[test]
    fn test_leave_out_of_range_is_rejected_without_mutation() {
        let mut lot = lot(3);
        park_car(&mut lot, "KA-01-HH-0001");

        assert!(matches!(lot.leave(0), Err(Error::InvalidSlot)));
        assert!(matches!(lot.leave(4), Err(Error::InvalidSlot)));
        assert!(matches!(lot.leave(-1), Err(Error::InvalidSlot)));

        assert_eq!(lot.occupied_count(), 1, "Rejected leaves must not touch any slot");
    }

    #[test]
    fn test_leave_empty_slot_is_noop_success() {
        let mut lot = lot(3);

        assert!(lot.leave(2).is_ok());
        assert_eq!(lot.occupied_count(), 0);
    }

    #[test]
    fn test_status_lists_occupied_slots_in_ascending_order() {
        let mut lot = lot(4);
        park_car(&mut lot, "KA-01-HH-0001");
        park_car(&mut lot, "KA-01-HH-0002");
        park_car(&mut lot, "KA-01-HH-0003");
        lot.leave(2).expect("slot 2 is in range");

        let slots: Vec<usize> = lot.status().iter().map(|(slot_no, _)| *slot_no).collect();
        assert_eq!(slots, vec![1, 3], "Empty slots must be omitted, rest ascending");
    }

    #[test]
    fn test_count_by_type_is_case_insensitive() {
        let mut lot = lot(4);
        lot.park(Vehicle::new("KA-01-HH-0001", "White", "Car")).unwrap();
        lot.park(Vehicle::new("KA-01-HH-0002", "Black", "car")).unwrap();
        lot.park(Vehicle::new("KA-01-BB-0001", "Black", "Truck")).unwrap();

        assert_eq!(lot.count_by_type("CAR"), 2);
        assert_eq!(lot.count_by_type("truck"), 1);
        assert_eq!(lot.count_by_type("Bus"), 0);
    }

    #[test]
    fn test_parity_queries_split_plates_and_skip_digitless() {
        let mut lot = lot(4);
        lot.park(Vehicle::new("KA-01-HH-1234", "White", "Car")).unwrap();
        lot.park(Vehicle::new("KA-01-HH-9999", "White", "Car")).unwrap();
        lot.park(Vehicle::new("AB-NONE", "Red", "Car")).unwrap();

        assert_eq!(lot.registrations_by_plate_parity(PlateParity::Even), vec!["KA-01-HH-1234"]);
        assert_eq!(lot.registrations_by_plate_parity(PlateParity::Odd), vec!["KA-01-HH-9999"]);
    }

    #[test]
    fn test_color_queries_are_case_insensitive_and_slot_ordered() {
        let mut lot = lot(4);
        lot.park(Vehicle::new("KA-01-HH-0001", "white", "Car")).unwrap();
        lot.park(Vehicle::new("KA-01-HH-0002", "Black", "Car")).unwrap();
        lot.park(Vehicle::new("KA-01-HH-0003", "White", "Car")).unwrap();

        assert_eq!(lot.registrations_by_color("White"), vec!["KA-01-HH-0001", "KA-01-HH-0003"]);
        assert_eq!(lot.slots_by_color("WHITE"), vec![1, 3]);
        assert!(lot.slots_by_color("Blue").is_empty());
    }

    #[test]
    fn test_slot_for_registration_is_case_insensitive() {
        let mut lot = lot(2);
        lot.park(Vehicle::new("KA-01-HH-0001", "White", "Car")).unwrap();

        assert_eq!(lot.slot_for_registration("ka-01-hh-0001"), Some(1));
        assert_eq!(lot.slot_for_registration("KA-01-HH-0002"), None);
    }

    #[test]
    fn test_duplicate_registration_resolves_to_lowest_slot() {
        // Duplicate registrations are permitted; lookups pick the lowest slot.
        let mut lot = lot(3);
        park_car(&mut lot, "KA-01-HH-0001");
        park_car(&mut lot, "KA-01-HH-0001");

        assert_eq!(lot.slot_for_registration("KA-01-HH-0001"), Some(1));
    }

    #[test]
    fn test_vacated_vehicle_disappears_from_queries() {
        let mut lot = lot(2);
        park_car(&mut lot, "KA-01-HH-0001");
        lot.leave(1).expect("slot 1 is in range");

        assert_eq!(lot.slot_for_registration("KA-01-HH-0001"), None);
        assert_eq!(lot.count_by_type("Car"), 0);
        assert!(lot.registrations_by_color("White").is_empty());
    }
}
