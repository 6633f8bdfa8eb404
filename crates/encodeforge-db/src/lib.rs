//! Encodeforge-DB: local preset persistence.
//!
//! SQLite storage via rusqlite with r2d2 connection pooling, wrapped behind
//! the [`PresetRepository`](repository::PresetRepository) trait that
//! providers depend on.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//! - `repository` - Repository trait with SQLite and in-memory backends
//!
//! # Example
//!
//! ```
//! use encodeforge_common::{LocalPreset, Preset};
//! use encodeforge_db::pool::init_memory_pool;
//! use encodeforge_db::repository::{PresetRepository, SqlitePresetRepository};
//!
//! let repo = SqlitePresetRepository::new(init_memory_pool().unwrap());
//! let preset = Preset { name: "mp4_1080p".into(), ..Default::default() };
//! repo.put(&LocalPreset::new(preset)).unwrap();
//! assert_eq!(repo.get("mp4_1080p").unwrap().name, "mp4_1080p");
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod repository;

pub use repository::{MemoryPresetRepository, PresetRepository, SqlitePresetRepository};
