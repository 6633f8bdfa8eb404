//! Provider registry mapping provider names to their constructors.
//!
//! The registry is a plain value built at process start. Nothing registers
//! itself implicitly: [`ProviderRegistry::with_builtin`] lists every
//! provider compiled into the crate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use encodeforge::transcode::ProviderRegistry;
//!
//! let registry = ProviderRegistry::with_builtin();
//! let provider = registry.build("zencoder", &config, store)?;
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use encodeforge_common::{Error, Result};

use super::presets::LocalPresetStore;
use super::provider::TranscodeProvider;
use super::providers::zencoder;
use crate::config::Config;

/// Constructor for one provider.
pub type ProviderFactory = fn(&Config, LocalPresetStore) -> Result<Arc<dyn TranscodeProvider>>;

#[derive(Clone, Default)]
pub struct ProviderRegistry {
    factories: BTreeMap<&'static str, ProviderFactory>,
}

impl ProviderRegistry {
    /// Create an empty registry with no providers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in provider.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(zencoder::NAME, zencoder::factory);
        registry
    }

    /// Register `factory` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, factory: ProviderFactory) {
        self.factories.insert(name, factory);
    }

    /// Registered provider names in lexical order.
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Construct the provider registered as `name`.
    ///
    /// Fails with [`Error::ProviderNotFound`] for unknown names and with
    /// whatever the factory reports for bad configuration.
    pub fn build(
        &self,
        name: &str,
        config: &Config,
        presets: LocalPresetStore,
    ) -> Result<Arc<dyn TranscodeProvider>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| Error::ProviderNotFound(name.to_string()))?;
        factory(config, presets)
    }
}
