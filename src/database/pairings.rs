use rusqlite::{params, Connection};

use crate::errors::{QueryContext, StoreResult};

use super::models::Pairing;

/// Replace the stored pairings with `pairings`, keeping their order.
pub fn replace_all(conn: &Connection, pairings: &[Pairing]) -> StoreResult<()> {
    delete_all(conn)?;

    let sql = "INSERT INTO swisspairing (playerid1, playername1, playerid2, playername2) VALUES (?1, ?2, ?3, ?4)";
    let mut stmt = conn.prepare(sql).query_context("Failed to prepare pairing insert")?;

    for pairing in pairings {
        stmt.execute(params![
            pairing.player_id1,
            pairing.player_name1,
            pairing.player_id2,
            pairing.player_name2
        ])
        .query_context("Failed to insert pairing")?;
    }

    Ok(())
}

fn parse_pairing_row(row: &rusqlite::Row) -> rusqlite::Result<Pairing> {
    Ok(Pairing {
        player_id1: row.get(0)?,
        player_name1: row.get(1)?,
        player_id2: row.get(2)?,
        player_name2: row.get(3)?,
    })
}

pub fn list_all(conn: &Connection) -> StoreResult<Vec<Pairing>> {
    let sql = "SELECT playerid1, playername1, playerid2, playername2 FROM swisspairing ORDER BY pairingid";

    let mut stmt = conn.prepare(sql).query_context("Failed to prepare pairing listing")?;
    let rows = stmt
        .query_map([], parse_pairing_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .query_context("Failed to list pairings")?;

    Ok(rows)
}

pub fn delete_all(conn: &Connection) -> StoreResult<usize> {
    conn.execute("DELETE FROM swisspairing", [])
        .query_context("Failed to delete pairings")
}
