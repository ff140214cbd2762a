use std::io::{self, Cursor};
use std::process::ExitCode;

use clap::Parser;

use parking_lot_system::dispatcher::session::CommandSession;
use parking_lot_system::error::Result;
use parking_lot_system::loader::parser::read_script;
use parking_lot_system::logger;

/// Line-oriented parking lot command interpreter.
#[derive(Debug, Parser)]
#[command(name = "parking_lot_system")]
struct Args {
    /// Command script to execute instead of reading from stdin.
    #[arg(short, long)]
    file: Option<String>,
}

fn main() -> ExitCode {
    logger::init();
    log::info!("Logger initialized. Starting parking lot session.");

    let args = Args::parse();

    println!("===( Start Parking Lot )===");
    let outcome = run(&args);
    println!("===( End Parking Lot )===");

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("Session aborted: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut session = CommandSession::new();

    match &args.file {
        Some(file_path) => {
            log::info!("Executing command script from '{}'...", file_path);
            let script = read_script(file_path)?;
            session.run(Cursor::new(script), stdout.lock())
        }
        None => {
            let stdin = io::stdin();
            session.run(stdin.lock(), stdout.lock())
        }
    }
}
