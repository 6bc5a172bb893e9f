use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss tournament store maintenance")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create the tournament tables if they are missing
    Init,
    /// Delete all matches, then all players, standings and pairings
    Reset,
    /// Print current standings, most wins first
    Standings {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compute and print pairings for the next round
    Pairings {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
