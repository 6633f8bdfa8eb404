//! Schema migrations for the preset store.
//!
//! The schema version is kept in SQLite's `user_version` pragma. Entry `n`
//! of [`MIGRATIONS`] moves the schema from version `n` to `n + 1`.

use rusqlite::Connection;
use thiserror::Error;

/// A migration that could not be applied.
#[derive(Error, Debug)]
#[error("migration {version} failed: {source}")]
pub struct MigrationError {
    pub version: usize,
    #[source]
    pub source: rusqlite::Error,
}

/// Embedded migration scripts, oldest first.
const MIGRATIONS: &[&str] = &[include_str!("001_local_presets.sql")];

/// Apply every migration newer than the stored schema version.
///
/// Each migration and its version bump commit together. Returns the number
/// of migrations applied.
pub fn run_migrations(conn: &Connection) -> Result<usize, MigrationError> {
    let current = schema_version(conn).map_err(|source| MigrationError { version: 0, source })?;

    let mut applied = 0;
    for (idx, sql) in MIGRATIONS.iter().enumerate().skip(current) {
        let version = idx + 1;
        let failed = |source| MigrationError { version, source };

        let tx = conn.unchecked_transaction().map_err(failed)?;
        tx.execute_batch(sql).map_err(failed)?;
        tx.pragma_update(None, "user_version", version as i64)
            .map_err(failed)?;
        tx.commit().map_err(failed)?;

        applied += 1;
        tracing::debug!(version, "Applied preset store migration");
    }

    Ok(applied)
}

/// Schema version recorded in the database, 0 for a fresh file.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<usize> {
    conn.pragma_query_value(None, "user_version", |row| row.get::<_, i64>(0))
        .map(|version| version.max(0) as usize)
}
