use rusqlite::Connection;

use crate::errors::{QueryContext, StoreResult};

use super::models::Standing;

/// Add a zeroed standing row for every player that has none yet.
pub fn insert_missing(conn: &Connection) -> StoreResult<usize> {
    let sql = "
        INSERT INTO playerstanding (playerid, playername)
        SELECT p.playerid, p.playername
        FROM players p
        WHERE NOT EXISTS (SELECT 1 FROM playerstanding s WHERE s.playerid = p.playerid)
        ORDER BY p.playerid
    ";

    conn.execute(sql, [])
        .query_context("Failed to insert missing standings")
}

/// Re-aggregate wins and matches for every standing row from the full match table.
pub fn recompute_all(conn: &Connection) -> StoreResult<usize> {
    let sql = "
        UPDATE playerstanding SET
            wins = (SELECT COUNT(*) FROM matches m WHERE m.winnerid = playerstanding.playerid),
            matches = (
                SELECT COUNT(*) FROM matches m
                WHERE m.winnerid = playerstanding.playerid OR m.loserid = playerstanding.playerid
            )
    ";

    conn.execute(sql, [])
        .query_context("Failed to recompute standings")
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<Standing> {
    Ok(Standing {
        player_id: row.get(0)?,
        player_name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
    })
}

/// Standings by wins descending, ties in registration order.
pub fn list_ordered(conn: &Connection) -> StoreResult<Vec<Standing>> {
    let sql = "SELECT playerid, playername, wins, matches FROM playerstanding ORDER BY wins DESC, playerid ASC";

    let mut stmt = conn.prepare(sql).query_context("Failed to prepare standings query")?;
    let rows = stmt
        .query_map([], parse_standing_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .query_context("Failed to list standings")?;

    Ok(rows)
}

pub fn delete_all(conn: &Connection) -> StoreResult<usize> {
    conn.execute("DELETE FROM playerstanding", [])
        .query_context("Failed to delete standings")
}
