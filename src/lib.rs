pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod pairing;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::info;
use serde::Serialize;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::database::{Pairing, Standing};

pub use crate::errors::{StoreError, StoreResult};
pub use crate::services::TournamentStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_store() -> Result<TournamentStore> {
    let config = AppConfig::from_env();
    TournamentStore::open(&config)
        .with_context(|| format!("Failed to open tournament database {}", config.store.database_path))
}

pub fn handle_init() -> Result<()> {
    open_store()?;
    info!("Tournament schema initialised");
    Ok(())
}

pub fn handle_reset() -> Result<()> {
    let store = open_store()?;
    store.delete_matches().context("Failed to delete matches")?;
    store.delete_players().context("Failed to delete players")?;
    info!("Tournament reset complete");
    Ok(())
}

pub fn handle_standings(json: bool) -> Result<()> {
    let store = open_store()?;
    let standings = store.player_standings().context("Failed to compute standings")?;

    if json {
        print_json(&standings)
    } else {
        println!("{}", format_standings(&standings));
        Ok(())
    }
}

pub fn handle_pairings(json: bool) -> Result<()> {
    let store = open_store()?;
    let pairings = store.swiss_pairings().context("Failed to compute pairings")?;

    if json {
        print_json(&pairings)
    } else {
        println!("{}", format_pairings(&pairings));
        Ok(())
    }
}

fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn format_standings(standings: &[Standing]) -> String {
    let mut out = String::from("#   ID    Player                 W   M");
    for (rank, s) in standings.iter().enumerate() {
        out.push_str(&format!(
            "\n{:<3} {:<5} {:<22} {:<3} {}",
            rank + 1,
            s.player_id,
            s.player_name,
            s.wins,
            s.matches
        ));
    }
    out
}

fn format_pairings(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return "No pairings".to_string();
    }

    pairings
        .iter()
        .enumerate()
        .map(|(table, p)| {
            format!(
                "Table {}: {} ({}) vs {} ({})",
                table + 1,
                p.player_name1,
                p.player_id1,
                p.player_name2,
                p.player_id2
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
