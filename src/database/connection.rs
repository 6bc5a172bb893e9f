use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::StoreSettings;
use crate::errors::StoreResult;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &StoreSettings) -> StoreResult<DbPool> {
    let manager = build_manager(&settings.database_path);
    build_pool(manager, settings)
}

/// Single-connection pool over a private in-memory database.
pub fn create_memory_pool() -> StoreResult<DbPool> {
    let manager = SqliteConnectionManager::memory().with_init(enable_foreign_keys);
    let settings = StoreSettings {
        pool_max_size: 1,
        ..StoreSettings::default()
    };
    build_pool(manager, &settings)
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    SqliteConnectionManager::file(path).with_init(enable_foreign_keys)
}

fn enable_foreign_keys(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
}

fn build_pool(manager: SqliteConnectionManager, settings: &StoreSettings) -> StoreResult<DbPool> {
    let pool = r2d2::Pool::builder()
        .max_size(settings.pool_max_size)
        .connection_timeout(settings.connection_timeout())
        .build(manager)?;
    Ok(pool)
}

pub fn get_connection(pool: &DbPool) -> StoreResult<DbConn> {
    Ok(pool.get()?)
}
