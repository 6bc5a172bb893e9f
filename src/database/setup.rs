use log::{debug, info};

use crate::errors::{QueryContext, StoreResult};

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");

// Dependents first so foreign keys never block the drop.
const DROP_ORDER: [&str; 4] = ["swisspairing", "playerstanding", "matches", "players"];

/// Create any missing tables; existing rows are left alone.
pub fn ensure_schema(conn: &mut DbConn) -> StoreResult<()> {
    let tx = conn.transaction().query_context("Failed to begin schema transaction")?;

    for (idx, statement) in split_sql_statements(SCHEMA_SQL).iter().enumerate() {
        debug!("Applying schema statement {}", idx + 1);
        tx.execute(statement, [])
            .query_context("Failed to execute schema statement")?;
    }

    tx.commit().query_context("Failed to commit schema")?;
    info!("Database schema ready");
    Ok(())
}

/// Drop every tournament table and recreate the schema from scratch.
pub fn reset_database(conn: &mut DbConn) -> StoreResult<()> {
    {
        let tx = conn.transaction().query_context("Failed to begin reset transaction")?;
        for table in DROP_ORDER {
            tx.execute(&format!("DROP TABLE IF EXISTS {table}"), [])
                .query_context("Failed to drop table")?;
        }
        tx.commit().query_context("Failed to commit table drops")?;
    }

    ensure_schema(conn)?;
    info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
