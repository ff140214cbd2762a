use crate::error::{Error, Result};

/// A single parsed line of the parking lot command protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateParkingLot { capacity: i64 },
    Park { registration_no: String, color: String, vehicle_type: String },
    Leave { slot_no: i64 },
    Status,
    TypeOfVehicles { vehicle_type: String },
    RegistrationNumbersWithOddPlate,
    RegistrationNumbersWithEvenPlate,
    RegistrationNumbersWithColour { color: String },
    SlotNumbersWithColour { color: String },
    SlotNumberForRegistration { registration_no: String },
    Exit,
}

impl Command {
    /// Parses one input line into a command.
    ///
    /// Fields are whitespace-separated and the first token selects the verb.
    /// Blank lines and unknown verbs parse to `None`; the protocol ignores
    /// them without output. Extra trailing tokens are ignored as well.
    ///
    /// # Returns
    /// `Error::MissingArgument` when a verb lacks a required field,
    /// `Error::InvalidNumber` when an integer field does not parse.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut tokens = line.split_whitespace();

        let Some(verb) = tokens.next() else {
            return Ok(None);
        };

        let command = match verb {
            "create_parking_lot" => Command::CreateParkingLot { capacity: parse_int(next_arg(&mut tokens, "create_parking_lot")?)? },
            "park" => Command::Park {
                registration_no: next_arg(&mut tokens, "park")?.to_string(),
                color: next_arg(&mut tokens, "park")?.to_string(),
                vehicle_type: next_arg(&mut tokens, "park")?.to_string(),
            },
            "leave" => Command::Leave { slot_no: parse_int(next_arg(&mut tokens, "leave")?)? },
            "status" => Command::Status,
            "type_of_vehicles" => Command::TypeOfVehicles { vehicle_type: next_arg(&mut tokens, "type_of_vehicles")?.to_string() },
            "registration_numbers_for_vehicles_with_odd_plate" => Command::RegistrationNumbersWithOddPlate,
            "registration_numbers_for_vehicles_with_even_plate" => Command::RegistrationNumbersWithEvenPlate,
            "registration_numbers_for_vehicles_with_colour" => {
                Command::RegistrationNumbersWithColour { color: next_arg(&mut tokens, "registration_numbers_for_vehicles_with_colour")?.to_string() }
            }
            "slot_numbers_for_vehicles_with_colour" => {
                Command::SlotNumbersWithColour { color: next_arg(&mut tokens, "slot_numbers_for_vehicles_with_colour")?.to_string() }
            }
            "slot_number_for_registration_number" => {
                Command::SlotNumberForRegistration { registration_no: next_arg(&mut tokens, "slot_number_for_registration_number")?.to_string() }
            }
            "exit" => Command::Exit,
            unknown => {
                log::debug!("Ignoring unknown command '{}'.", unknown);
                return Ok(None);
            }
        };

        Ok(Some(command))
    }
}

fn next_arg<'a>(tokens: &mut impl Iterator<Item = &'a str>, verb: &'static str) -> Result<&'a str> {
    tokens.next().ok_or(Error::MissingArgument(verb))
}

fn parse_int(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| Error::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::Command;
    use crate::error::Error;

    #[test]
    fn test_parse_park() {
        let command = Command::parse("park KA-01-HH-1234 White Car").unwrap();

        assert_eq!(
            command,
            Some(Command::Park {
                registration_no: "KA-01-HH-1234".to_string(),
                color: "White".to_string(),
                vehicle_type: "Car".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let command = Command::parse("  leave    3 ").unwrap();
        assert_eq!(command, Some(Command::Leave { slot_no: 3 }));
    }

    #[test]
    fn test_blank_and_unknown_lines_parse_to_none() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("open_the_gate now").unwrap(), None);
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let result = Command::parse("create_parking_lot six");
        assert!(matches!(result, Err(Error::InvalidNumber(token)) if token == "six"));
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        let result = Command::parse("park KA-01-HH-1234 White");
        assert!(matches!(result, Err(Error::MissingArgument("park"))));
    }
}
