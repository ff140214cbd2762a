use std::collections::BTreeMap;

use crate::domain::plate::PlateParity;
use crate::domain::vehicle::Vehicle;
use crate::error::{Error, Result};

/// In-memory registry of a single parking lot.
///
/// Slot numbers run from 1 to `capacity`. Every slot number is present in
/// the map at all times, holding either the occupying [`Vehicle`] or `None`;
/// no key outside that range ever exists. The map is ordered, so scans and
/// queries naturally yield ascending slot numbers.
#[derive(Debug)]
pub struct ParkingLot {
    capacity: usize,
    slots: BTreeMap<usize, Option<Vehicle>>,
}

impl ParkingLot {
    /// Creates a lot with `capacity` empty slots numbered 1..=capacity.
    ///
    /// # Returns
    /// `Error::InvalidCapacity` if `capacity` is not positive.
    pub fn new(capacity: i64) -> Result<Self> {
        if capacity <= 0 {
            log::error!("Rejected parking lot creation with capacity {}.", capacity);
            return Err(Error::InvalidCapacity(capacity));
        }

        let capacity = capacity as usize;
        let slots = (1..=capacity).map(|slot_no| (slot_no, None)).collect();

        log::info!("Created parking lot with {} slots.", capacity);

        Ok(ParkingLot { capacity, slots })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of currently occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.occupants().count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.values().all(|occupant| occupant.is_some())
    }

    /// Parks `vehicle` in the lowest-numbered empty slot.
    ///
    /// Allocation is first-fit by slot number: a freshly vacated slot 2 wins
    /// over a never-used slot 5, regardless of vacation order.
    ///
    /// # Returns
    /// The allocated slot number, or `Error::Full` when every slot is
    /// occupied. A full lot is left completely unchanged.
    pub fn park(&mut self, vehicle: Vehicle) -> Result<usize> {
        if self.slot_for_registration(&vehicle.registration_no).is_some() {
            log::warn!("Registration '{}' is already parked. Allocating a second slot anyway.", vehicle.registration_no);
        }

        let Some(slot_no) = self.next_available_slot() else {
            log::info!("Rejected '{}': all {} slots are occupied.", vehicle.registration_no, self.capacity);
            return Err(Error::Full);
        };

        log::debug!("Allocated slot {} to '{}'.", slot_no, vehicle.registration_no);
        self.slots.insert(slot_no, Some(vehicle));

        Ok(slot_no)
    }

    /// Vacates `slot_no`. Vacating an already-empty slot is a no-op success.
    ///
    /// # Returns
    /// `Error::InvalidSlot` if `slot_no` is outside [1, capacity]; the lot
    /// is not modified in that case.
    pub fn leave(&mut self, slot_no: i64) -> Result<()> {
        if slot_no < 1 || slot_no > self.capacity as i64 {
            log::warn!("Leave rejected: slot {} is outside 1..={}.", slot_no, self.capacity);
            return Err(Error::InvalidSlot);
        }

        let slot_no = slot_no as usize;
        match self.slots.insert(slot_no, None) {
            Some(Some(vehicle)) => log::debug!("Slot {} vacated by '{}'.", slot_no, vehicle.registration_no),
            _ => log::debug!("Slot {} was already empty.", slot_no),
        }

        Ok(())
    }

    /// All occupied slots with their occupants, in ascending slot order.
    pub fn status(&self) -> Vec<(usize, &Vehicle)> {
        self.occupants().collect()
    }

    /// Number of occupied slots whose vehicle type matches, case-insensitively.
    pub fn count_by_type(&self, vehicle_type: &str) -> usize {
        self.occupants().filter(|(_, vehicle)| vehicle.is_type(vehicle_type)).count()
    }

    /// Registrations whose plate parity matches, in slot order.
    ///
    /// Plates without a digit character belong to neither parity and never
    /// appear in the result.
    pub fn registrations_by_plate_parity(&self, parity: PlateParity) -> Vec<String> {
        self.occupants()
            .filter(|(_, vehicle)| vehicle.plate_parity() == Some(parity))
            .map(|(_, vehicle)| vehicle.registration_no.clone())
            .collect()
    }

    /// Registrations of vehicles with a matching color, in slot order.
    pub fn registrations_by_color(&self, color: &str) -> Vec<String> {
        self.occupants().filter(|(_, vehicle)| vehicle.has_color(color)).map(|(_, vehicle)| vehicle.registration_no.clone()).collect()
    }

    /// Slot numbers holding vehicles of a matching color, ascending.
    pub fn slots_by_color(&self, color: &str) -> Vec<usize> {
        self.occupants().filter(|(_, vehicle)| vehicle.has_color(color)).map(|(slot_no, _)| slot_no).collect()
    }

    /// Lowest slot number whose occupant carries `registration_no`,
    /// compared case-insensitively.
    pub fn slot_for_registration(&self, registration_no: &str) -> Option<usize> {
        self.occupants().find(|(_, vehicle)| vehicle.has_registration(registration_no)).map(|(slot_no, _)| slot_no)
    }

    fn occupants(&self) -> impl Iterator<Item = (usize, &Vehicle)> {
        self.slots.iter().filter_map(|(slot_no, occupant)| occupant.as_ref().map(|vehicle| (*slot_no, vehicle)))
    }

    fn next_available_slot(&self) -> Option<usize> {
        self.slots.iter().find(|(_, occupant)| occupant.is_none()).map(|(slot_no, _)| *slot_no)
    }
}
