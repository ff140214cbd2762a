pub mod parking_lot;
pub mod plate;
pub mod vehicle;

#[cfg(test)]
mod parking_lot_tests;
