//! Encodeforge-Common: canonical model shared by every provider adapter.
//!
//! - **Presets**: [`Preset`], [`LocalPreset`] and the per-provider [`PresetMap`]
//! - **Jobs**: [`Job`], [`TranscodeProfile`] and the [`JobStatus`] reported
//!   back to the orchestrator
//! - **Error Handling**: [`Error`], its [`ErrorKind`] taxonomy and a result alias
//!
//! # Examples
//!
//! ```
//! use encodeforge_common::{Error, ErrorKind, LocalPreset, Preset, Result};
//!
//! fn store(preset: Preset) -> Result<LocalPreset> {
//!     if preset.name.is_empty() {
//!         return Err(Error::PresetNameMissing);
//!     }
//!     Ok(LocalPreset::new(preset))
//! }
//!
//! let err = store(Preset::default()).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Validation);
//! ```

pub mod error;
pub mod job;
pub mod preset;

pub use error::{Error, ErrorKind, Result};
pub use job::*;
pub use preset::*;
