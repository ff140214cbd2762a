use std::fs;

use crate::error::Result;

/// Reads a command script from `file_path`.
///
/// The file is expected to hold one protocol command per line. The content
/// is not validated here; the command parser handles each line, including
/// malformed ones, when the session runs.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
pub fn read_script(file_path: &str) -> Result<String> {
    let script = fs::read_to_string(file_path)?;

    Ok(script)
}
