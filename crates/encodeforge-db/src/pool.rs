//! Database connection pool management.
//!
//! Connection pooling for SQLite using r2d2. Pool initialization also runs
//! pending migrations so callers always receive a ready schema.

use encodeforge_common::{Error, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::migrations;

/// Type alias for the database connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Initialize a new database pool with the given file path.
///
/// Creates the SQLite file if needed, builds a pool of 4 connections and
/// runs pending migrations.
///
/// # Example
///
/// ```no_run
/// use encodeforge_db::pool::init_pool;
///
/// let pool = init_pool("/var/lib/encodeforge/presets.sqlite").unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_pool(db_path: &str) -> Result<DbPool> {
    build_pool(SqliteConnectionManager::file(db_path), 4)
}

/// Initialize an in-memory database pool.
///
/// Every SQLite in-memory connection is its own database, so the pool is
/// capped at a single connection to keep all callers on the same schema.
///
/// # Example
///
/// ```
/// use encodeforge_db::pool::init_memory_pool;
///
/// let pool = init_memory_pool().unwrap();
/// let conn = pool.get().unwrap();
/// ```
pub fn init_memory_pool() -> Result<DbPool> {
    build_pool(SqliteConnectionManager::memory(), 1)
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32) -> Result<DbPool> {
    let pool = Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(|e| Error::database(format!("Failed to create connection pool: {}", e)))?;

    let conn = pool
        .get()
        .map_err(|e| Error::database(format!("Failed to get connection for migrations: {}", e)))?;

    migrations::run_migrations(&conn)
        .map_err(|e| Error::database(format!("Failed to run migrations: {}", e)))?;

    Ok(pool)
}

/// Get a connection from the pool, converting the r2d2 error.
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get()
        .map_err(|e| Error::database(format!("Failed to get connection from pool: {}", e)))
}
