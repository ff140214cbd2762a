use std::io::{BufRead, Write};

use crate::dispatcher::command::Command;
use crate::domain::parking_lot::ParkingLot;
use crate::domain::plate::PlateParity;
use crate::domain::vehicle::Vehicle;
use crate::error::{Error, Result};

/// Drives a parking lot through the line-oriented command protocol.
///
/// The session owns the lot it manages; the lot comes into existence with
/// the first `create_parking_lot` command and is replaced by any later one.
/// Commands that need a lot before then fail with `Error::NotInitialized`
/// instead of crashing the loop.
#[derive(Debug, Default)]
pub struct CommandSession {
    lot: Option<ParkingLot>,
}

impl CommandSession {
    pub fn new() -> Self {
        CommandSession { lot: None }
    }

    /// The managed lot, once `create_parking_lot` has run.
    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    /// Executes a single command against the session state.
    ///
    /// # Returns
    /// `Ok(Some(text))` with the protocol output (multi-line for `status`),
    /// `Ok(None)` for commands without output, or an error whose display
    /// text is the protocol's failure line for that command.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>> {
        match command {
            Command::CreateParkingLot { capacity } => {
                if self.lot.is_some() {
                    log::info!("Replacing the existing parking lot.");
                }

                let lot = ParkingLot::new(capacity)?;
                let slots = lot.capacity();
                self.lot = Some(lot);

                Ok(Some(format!("Created a parking lot with {} slots", slots)))
            }
            Command::Park { registration_no, color, vehicle_type } => {
                let vehicle = Vehicle::new(registration_no, color, vehicle_type);
                let slot_no = self.require_lot_mut()?.park(vehicle)?;

                Ok(Some(format!("Allocated slot number: {}", slot_no)))
            }
            Command::Leave { slot_no } => {
                self.require_lot_mut()?.leave(slot_no)?;

                Ok(Some(format!("Slot number {} is free", slot_no)))
            }
            Command::Status => {
                let lot = self.require_lot()?;

                let mut lines = vec!["Slot No. Registration No\tType\tColour".to_string()];
                for (slot_no, vehicle) in lot.status() {
                    lines.push(format!("{}\t {}\t\t{}\t{}", slot_no, vehicle.registration_no, vehicle.vehicle_type, vehicle.color));
                }

                Ok(Some(lines.join("\n")))
            }
            Command::TypeOfVehicles { vehicle_type } => Ok(Some(self.require_lot()?.count_by_type(&vehicle_type).to_string())),
            Command::RegistrationNumbersWithOddPlate => {
                Ok(Some(self.require_lot()?.registrations_by_plate_parity(PlateParity::Odd).join(", ")))
            }
            Command::RegistrationNumbersWithEvenPlate => {
                Ok(Some(self.require_lot()?.registrations_by_plate_parity(PlateParity::Even).join(", ")))
            }
            Command::RegistrationNumbersWithColour { color } => Ok(Some(self.require_lot()?.registrations_by_color(&color).join(", "))),
            Command::SlotNumbersWithColour { color } => {
                let slot_numbers: Vec<String> = self.require_lot()?.slots_by_color(&color).iter().map(|slot_no| slot_no.to_string()).collect();

                Ok(Some(slot_numbers.join(", ")))
            }
            Command::SlotNumberForRegistration { registration_no } => {
                let slot_no = self.require_lot()?.slot_for_registration(&registration_no).ok_or(Error::NotFound)?;

                Ok(Some(slot_no.to_string()))
            }
            Command::Exit => Ok(None),
        }
    }

    /// Runs the full read loop: one command per line until `exit` or end of
    /// input. Command errors are printed as single lines and never stop the
    /// loop; only a failure to read or write ends the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;

            match Command::parse(&line) {
                Ok(Some(Command::Exit)) => {
                    log::info!("Exit command received. Terminating session.");
                    break;
                }
                Ok(Some(command)) => match self.execute(command) {
                    Ok(Some(text)) => writeln!(output, "{}", text)?,
                    Ok(None) => {}
                    Err(error) => writeln!(output, "{}", error)?,
                },
                Ok(None) => {}
                Err(error) => writeln!(output, "{}", error)?,
            }
        }

        Ok(())
    }

    fn require_lot(&self) -> Result<&ParkingLot> {
        self.lot.as_ref().ok_or(Error::NotInitialized)
    }

    fn require_lot_mut(&mut self) -> Result<&mut ParkingLot> {
        self.lot.as_mut().ok_or(Error::NotInitialized)
    }
}
