use log::{debug, info, warn};
use rusqlite::Transaction;

use crate::config::AppConfig;
use crate::database::{self, matches, pairings, players, setup, standings};
use crate::database::{DbPool, Match, Pairing, Player, Standing};
use crate::errors::{QueryContext, StoreResult};
use crate::pairing::{pair_standings, PairingPlan};

use super::validation;

/// Swiss tournament bookkeeping backed by a relational store.
///
/// Holds only a connection pool. Each operation checks out a connection for
/// its own duration and runs its statements in a single transaction, so a
/// failure part way through leaves no partial writes behind.
#[derive(Clone)]
pub struct TournamentStore {
    pool: DbPool,
}

impl TournamentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect to the configured database file and create missing tables.
    pub fn open(config: &AppConfig) -> StoreResult<Self> {
        info!("Opening tournament store at {}", config.store.database_path);
        let pool = database::create_pool(&config.store)?;
        let store = Self::new(pool);
        store.ensure_schema()?;
        Ok(store)
    }

    /// Private in-memory store with the schema applied.
    pub fn in_memory() -> StoreResult<Self> {
        let store = Self::new(database::create_memory_pool()?);
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn ensure_schema(&self) -> StoreResult<()> {
        let mut conn = database::get_connection(&self.pool)?;
        setup::ensure_schema(&mut conn)
    }

    /// Remove every match. Standings stay stale until the next recompute.
    pub fn delete_matches(&self) -> StoreResult<()> {
        let removed = self.with_transaction(|tx| matches::delete_all(tx))?;
        info!("Deleted {} matches", removed);
        Ok(())
    }

    /// Remove every pairing, standing and player.
    ///
    /// Fails while matches still reference players; delete matches first.
    pub fn delete_players(&self) -> StoreResult<()> {
        let removed = self.with_transaction(|tx| {
            pairings::delete_all(tx)?;
            standings::delete_all(tx)?;
            players::delete_all(tx)
        })?;
        info!("Deleted {} players", removed);
        Ok(())
    }

    pub fn count_players(&self) -> StoreResult<i64> {
        let conn = database::get_connection(&self.pool)?;
        players::count(&conn)
    }

    /// Add a player; names need not be unique.
    pub fn register_player(&self, name: &str) -> StoreResult<Player> {
        validation::validate_player_name(name)?;

        let player = self.with_transaction(|tx| players::insert_player(tx, name))?;
        debug!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    /// Record a result and re-aggregate every standing from the full match table.
    pub fn report_match(&self, winner_id: i32, loser_id: i32) -> StoreResult<Match> {
        let recorded = self.with_transaction(|tx| {
            validation::validate_match(tx, winner_id, loser_id)?;
            let recorded = matches::insert_match(tx, winner_id, loser_id)?;
            standings::recompute_all(tx)?;
            Ok(recorded)
        })?;

        debug!(
            "Recorded match {}: {} beat {}",
            recorded.id, recorded.winner_id, recorded.loser_id
        );
        Ok(recorded)
    }

    /// Current standings, most wins first.
    pub fn player_standings(&self) -> StoreResult<Vec<Standing>> {
        self.with_transaction(|tx| {
            refresh_standings(tx)?;
            standings::list_ordered(tx)
        })
    }

    /// Build and store next-round pairings: one-win players against zero-win players.
    pub fn swiss_pairings(&self) -> StoreResult<Vec<Pairing>> {
        let plan = self.with_transaction(|tx| {
            refresh_standings(tx)?;
            let current = standings::list_ordered(tx)?;
            let plan = pair_standings(&current);
            pairings::replace_all(tx, &plan.pairings)?;
            Ok(plan)
        })?;

        report_leftovers(&plan);
        info!("Generated {} pairings", plan.pairings.len());
        Ok(plan.pairings)
    }

    pub fn players(&self) -> StoreResult<Vec<Player>> {
        let conn = database::get_connection(&self.pool)?;
        players::list_all(&conn)
    }

    pub fn matches(&self) -> StoreResult<Vec<Match>> {
        let conn = database::get_connection(&self.pool)?;
        matches::list_all(&conn)
    }

    fn with_transaction<T, F>(&self, op: F) -> StoreResult<T>
    where
        F: FnOnce(&Transaction) -> StoreResult<T>,
    {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().query_context("Failed to begin transaction")?;
        let value = op(&tx)?;
        tx.commit().query_context("Failed to commit transaction")?;
        Ok(value)
    }
}

fn refresh_standings(tx: &Transaction) -> StoreResult<()> {
    let added = standings::insert_missing(tx)?;
    if added > 0 {
        debug!("Added {} standing rows", added);
    }
    standings::recompute_all(tx)?;
    Ok(())
}

fn report_leftovers(plan: &PairingPlan) {
    for standing in &plan.unpaired {
        warn!(
            "Player {} ({}) has no opponent this round",
            standing.player_id, standing.player_name
        );
    }
    for standing in &plan.excluded {
        warn!(
            "Player {} ({}) has {} wins and is outside the pairing buckets",
            standing.player_id, standing.player_name, standing.wins
        );
    }
}
