use thiserror::Error;

/// Crate-wide error type.
///
/// The display text of the protocol-facing variants (`Full`, `InvalidSlot`,
/// `NotFound`, ...) is exactly the line the command interface prints for
/// them. None of these terminate the command loop; only `IoError` can end a
/// session early.
#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A parking lot needs at least one slot, got {0}")]
    InvalidCapacity(i64),

    #[error("Sorry, parking lot is full")]
    Full,

    #[error("Invalid slot number")]
    InvalidSlot,

    #[error("Not found")]
    NotFound,

    #[error("Parking lot has not been created yet")]
    NotInitialized,

    #[error("Not a number: '{0}'")]
    InvalidNumber(String),

    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
