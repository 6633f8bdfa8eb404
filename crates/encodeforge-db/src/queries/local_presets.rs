//! Local preset database queries.
//!
//! Presets are stored as JSON documents keyed by name. Saving a preset under
//! an existing name replaces it and keeps the original creation time.

use chrono::{DateTime, Utc};
use encodeforge_common::{Error, LocalPreset, Preset, Result};
use rusqlite::{Connection, Row};

use crate::models::LocalPresetRecord;

/// Insert or replace a local preset.
///
/// # Returns
///
/// * `Ok(LocalPresetRecord)` - The stored row
/// * `Err(Error)` - If serialization or the database write fails
pub fn upsert_local_preset(conn: &Connection, preset: &LocalPreset) -> Result<LocalPresetRecord> {
    let now = Utc::now();
    let preset_json = serde_json::to_string(&preset.preset)
        .map_err(|e| Error::database(format!("Failed to serialize preset: {}", e)))?;

    conn.execute(
        "INSERT INTO local_presets (name, preset_json, created_at, updated_at)
         VALUES (:name, :preset_json, :now, :now)
         ON CONFLICT(name) DO UPDATE SET
            preset_json = excluded.preset_json,
            updated_at = excluded.updated_at",
        rusqlite::named_params! {
            ":name": preset.name,
            ":preset_json": preset_json,
            ":now": now.to_rfc3339(),
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    get_local_preset(conn, &preset.name)?
        .ok_or_else(|| Error::database(format!("preset {} vanished after write", preset.name)))
}

/// Get a local preset by name.
///
/// # Returns
///
/// * `Ok(Some(LocalPresetRecord))` - The preset if found
/// * `Ok(None)` - If no preset has that name
/// * `Err(Error)` - If a database error occurs
pub fn get_local_preset(conn: &Connection, name: &str) -> Result<Option<LocalPresetRecord>> {
    let result = conn.query_row(
        "SELECT name, preset_json, created_at, updated_at
         FROM local_presets WHERE name = :name",
        rusqlite::named_params! { ":name": name },
        row_to_record,
    );

    match result {
        Ok(record) => Ok(Some(record)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Delete a local preset.
///
/// # Returns
///
/// * `Ok(true)` - If the preset was deleted
/// * `Ok(false)` - If no preset had that name
/// * `Err(Error)` - If a database error occurs
pub fn delete_local_preset(conn: &Connection, name: &str) -> Result<bool> {
    let rows_affected = conn
        .execute(
            "DELETE FROM local_presets WHERE name = :name",
            rusqlite::named_params! { ":name": name },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(rows_affected > 0)
}

/// List all local presets ordered by name.
pub fn list_local_presets(conn: &Connection) -> Result<Vec<LocalPresetRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT name, preset_json, created_at, updated_at
             FROM local_presets ORDER BY name",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let rows = stmt
        .query_map([], row_to_record)
        .map_err(|e| Error::database(e.to_string()))?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| Error::database(e.to_string()))
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<LocalPresetRecord> {
    let name: String = row.get(0)?;
    let preset_json: String = row.get(1)?;
    let preset: Preset = serde_json::from_str(&preset_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(LocalPresetRecord {
        preset: LocalPreset { name, preset },
        created_at: parse_timestamp(row, 2)?,
        updated_at: parse_timestamp(row, 3)?,
    })
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
