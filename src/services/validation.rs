use rusqlite::Connection;

use crate::database::players;
use crate::errors::{StoreError, StoreResult};

pub fn validate_player_name(name: &str) -> StoreResult<()> {
    if name.trim().is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(())
}

/// Reject self-matches and ids that do not belong to a registered player.
pub fn validate_match(conn: &Connection, winner_id: i32, loser_id: i32) -> StoreResult<()> {
    if winner_id == loser_id {
        return Err(StoreError::SelfMatch(winner_id));
    }

    for player_id in [winner_id, loser_id] {
        ensure_registered(conn, player_id)?;
    }

    Ok(())
}

fn ensure_registered(conn: &Connection, player_id: i32) -> StoreResult<()> {
    match players::find_by_id(conn, player_id)? {
        Some(_) => Ok(()),
        None => Err(StoreError::UnknownPlayer(player_id)),
    }
}
