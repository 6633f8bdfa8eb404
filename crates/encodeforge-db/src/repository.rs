//! Repository abstraction over local preset storage.
//!
//! Providers only talk to [`PresetRepository`]. Each single-key operation is
//! atomic with respect to the others; callers need no extra locking.

use std::collections::BTreeMap;

use encodeforge_common::{Error, LocalPreset, Result};
use parking_lot::RwLock;

use crate::pool::{get_conn, DbPool};
use crate::queries::local_presets;

/// Key/value store for named local presets.
pub trait PresetRepository: Send + Sync {
    /// Store `preset` under its name, replacing any previous entry.
    fn put(&self, preset: &LocalPreset) -> Result<()>;

    /// Fetch a preset, failing with [`Error::LocalPresetNotFound`] when absent.
    fn get(&self, name: &str) -> Result<LocalPreset>;

    /// Remove a preset. Returns whether anything was removed.
    fn delete(&self, name: &str) -> Result<bool>;

    /// All stored presets ordered by name.
    fn list(&self) -> Result<Vec<LocalPreset>>;
}

/// SQLite-backed repository.
#[derive(Clone)]
pub struct SqlitePresetRepository {
    pool: DbPool,
}

impl SqlitePresetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl PresetRepository for SqlitePresetRepository {
    fn put(&self, preset: &LocalPreset) -> Result<()> {
        let conn = get_conn(&self.pool)?;
        local_presets::upsert_local_preset(&conn, preset)?;
        Ok(())
    }

    fn get(&self, name: &str) -> Result<LocalPreset> {
        let conn = get_conn(&self.pool)?;
        local_presets::get_local_preset(&conn, name)?
            .map(|record| record.preset)
            .ok_or(Error::LocalPresetNotFound)
    }

    fn delete(&self, name: &str) -> Result<bool> {
        let conn = get_conn(&self.pool)?;
        local_presets::delete_local_preset(&conn, name)
    }

    fn list(&self) -> Result<Vec<LocalPreset>> {
        let conn = get_conn(&self.pool)?;
        Ok(local_presets::list_local_presets(&conn)?
            .into_iter()
            .map(|record| record.preset)
            .collect())
    }
}

/// Process-local repository, used when no database is configured.
#[derive(Default)]
pub struct MemoryPresetRepository {
    presets: RwLock<BTreeMap<String, LocalPreset>>,
}

impl MemoryPresetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresetRepository for MemoryPresetRepository {
    fn put(&self, preset: &LocalPreset) -> Result<()> {
        self.presets
            .write()
            .insert(preset.name.clone(), preset.clone());
        Ok(())
    }

    fn get(&self, name: &str) -> Result<LocalPreset> {
        self.presets
            .read()
            .get(name)
            .cloned()
            .ok_or(Error::LocalPresetNotFound)
    }

    fn delete(&self, name: &str) -> Result<bool> {
        Ok(self.presets.write().remove(name).is_some())
    }

    fn list(&self) -> Result<Vec<LocalPreset>> {
        Ok(self.presets.read().values().cloned().collect())
    }
}
