use crate::domain::plate::{self, PlateParity};

/// A vehicle occupying a parking slot.
///
/// The record is immutable for the duration of its stay: it is created when
/// a slot is allocated and dropped again when that slot is vacated. The
/// registration number acts as an identifier while the vehicle is parked,
/// but uniqueness across slots is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub registration_no: String,
    pub color: String,
    pub vehicle_type: String,
}

impl Vehicle {
    pub fn new(registration_no: impl Into<String>, color: impl Into<String>, vehicle_type: impl Into<String>) -> Self {
        Vehicle { registration_no: registration_no.into(), color: color.into(), vehicle_type: vehicle_type.into() }
    }

    /// Parity of the registration plate, if the plate carries any digit.
    pub fn plate_parity(&self) -> Option<PlateParity> {
        plate::parity(&self.registration_no)
    }

    /// Case-insensitive color match.
    pub fn has_color(&self, color: &str) -> bool {
        self.color.eq_ignore_ascii_case(color)
    }

    /// Case-insensitive vehicle-type match.
    pub fn is_type(&self, vehicle_type: &str) -> bool {
        self.vehicle_type.eq_ignore_ascii_case(vehicle_type)
    }

    /// Case-insensitive registration match.
    pub fn has_registration(&self, registration_no: &str) -> bool {
        self.registration_no.eq_ignore_ascii_case(registration_no)
    }
}
