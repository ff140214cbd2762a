use std::io::{Cursor, Write};

use crate::dispatcher::session::CommandSession;
use crate::error::Result;
use crate::loader::parser::read_script;

pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Runs a complete command session from a script file, writing protocol
/// output to `output`.
pub fn run_script(file_path: &str, output: impl Write) -> Result<()> {
    logger::init();
    log::info!("Logger initialized. Loading command script.");

    let script = read_script(file_path)?;
    log::info!("Script '{}' loaded successfully.", file_path);

    let mut session = CommandSession::new();
    session.run(Cursor::new(script), output)?;
    log::info!("Command session finished.");

    Ok(())
}
