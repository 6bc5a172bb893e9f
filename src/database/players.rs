use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::{QueryContext, StoreResult};

use super::models::Player;

pub fn insert_player(conn: &Connection, name: &str) -> StoreResult<Player> {
    let sql = "INSERT INTO players (playername) VALUES (?1) RETURNING playerid, playername, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .query_context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &Connection, id: i32) -> StoreResult<Option<Player>> {
    let sql = "SELECT playerid, playername, created_at FROM players WHERE playerid = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .query_context("Failed to query player by id")
}

pub fn list_all(conn: &Connection) -> StoreResult<Vec<Player>> {
    let sql = "SELECT playerid, playername, created_at FROM players ORDER BY playerid";

    let mut stmt = conn.prepare(sql).query_context("Failed to prepare player listing")?;
    let rows = stmt
        .query_map([], parse_player_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .query_context("Failed to list players")?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> StoreResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
        .query_context("Failed to count players")
}

pub fn delete_all(conn: &Connection) -> StoreResult<usize> {
    conn.execute("DELETE FROM players", [])
        .query_context("Failed to delete players")
}
