use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::{handle_init, handle_pairings, handle_reset, handle_standings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Init => handle_init(),
        Command::Reset => handle_reset(),
        Command::Standings { json } => handle_standings(*json),
        Command::Pairings { json } => handle_pairings(*json),
    }
}
