/// Parity of a registration plate, derived from its digit characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateParity {
    Odd,
    Even,
}

/// Determines the parity of a registration number.
///
/// The full string is scanned left to right, non-digit characters are
/// dropped, and the last remaining digit decides odd or even. Note this is
/// not "the numeric suffix": for `W1X-2` the deciding digit is `2`. Plates
/// without any digit have no parity at all.
pub fn parity(registration_no: &str) -> Option<PlateParity> {
    let last_digit = registration_no.chars().filter(|c| c.is_ascii_digit()).last()?;
    let value = last_digit.to_digit(10)?;

    if value % 2 == 0 { Some(PlateParity::Even) } else { Some(PlateParity::Odd) }
}
