use rusqlite::{params, Connection};

use crate::errors::{QueryContext, StoreResult};

use super::models::Match;

pub fn insert_match(conn: &Connection, winner_id: i32, loser_id: i32) -> StoreResult<Match> {
    let sql = "INSERT INTO matches (winnerid, loserid) VALUES (?1, ?2) RETURNING matchid, winnerid, loserid, created_at";

    conn.query_row(sql, params![winner_id, loser_id], parse_match_row)
        .query_context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn list_all(conn: &Connection) -> StoreResult<Vec<Match>> {
    let sql = "SELECT matchid, winnerid, loserid, created_at FROM matches ORDER BY matchid";

    let mut stmt = conn.prepare(sql).query_context("Failed to prepare match listing")?;
    let rows = stmt
        .query_map([], parse_match_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .query_context("Failed to list matches")?;

    Ok(rows)
}

pub fn delete_all(conn: &Connection) -> StoreResult<usize> {
    conn.execute("DELETE FROM matches", [])
        .query_context("Failed to delete matches")
}
