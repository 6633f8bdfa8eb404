//! Rust models matching the database schema.

use chrono::{DateTime, Utc};
use encodeforge_common::LocalPreset;

/// A row of the `local_presets` table.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalPresetRecord {
    pub preset: LocalPreset,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
