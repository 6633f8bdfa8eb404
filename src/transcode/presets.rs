//! Local preset store shared by providers.
//!
//! Wraps a [`PresetRepository`] and enforces that every stored preset has a
//! name. Storage mechanics stay with the repository.

use std::sync::Arc;

use encodeforge_common::{Error, LocalPreset, Preset, Result};
use encodeforge_db::pool::init_pool;
use encodeforge_db::{PresetRepository, SqlitePresetRepository};
use tracing::debug;

use crate::config::{DatabaseConfig, DEFAULT_DATABASE_FILE};

#[derive(Clone)]
pub struct LocalPresetStore {
    repo: Arc<dyn PresetRepository>,
}

impl LocalPresetStore {
    pub fn new(repo: Arc<dyn PresetRepository>) -> Self {
        Self { repo }
    }

    /// Open the SQLite preset database described by `config`, creating it
    /// and running migrations as needed.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        let path = config
            .path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATABASE_FILE.to_string());
        debug!(path = %path, "Opening preset database");
        let pool = init_pool(&path)?;
        Ok(Self::new(Arc::new(SqlitePresetRepository::new(pool))))
    }

    /// Store `preset` under its name and return that name.
    pub fn create(&self, preset: Preset) -> Result<String> {
        if preset.name.is_empty() {
            return Err(Error::PresetNameMissing);
        }
        let local = LocalPreset::new(preset);
        self.repo.put(&local)?;
        debug!(preset = %local.name, "Stored local preset");
        Ok(local.name)
    }

    pub fn get(&self, name: &str) -> Result<LocalPreset> {
        self.repo.get(name)
    }

    /// Remove a preset. Removing a preset that does not exist succeeds.
    pub fn delete(&self, name: &str) -> Result<()> {
        if !self.repo.delete(name)? {
            debug!(preset = %name, "Local preset already absent");
        }
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<LocalPreset>> {
        self.repo.list()
    }
}
