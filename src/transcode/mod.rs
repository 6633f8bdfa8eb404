//! Transcoding providers.
//!
//! [`TranscodeProvider`] is the uniform interface a job orchestrator drives.
//! [`ProviderRegistry`] maps provider names to constructors and
//! [`LocalPresetStore`] holds the canonical presets providers translate.

pub mod presets;
pub mod provider;
pub mod providers;
pub mod registry;

pub use presets::LocalPresetStore;
pub use provider::TranscodeProvider;
pub use registry::{ProviderFactory, ProviderRegistry};
