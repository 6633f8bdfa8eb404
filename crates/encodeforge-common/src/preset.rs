//! Provider-agnostic encoding presets.
//!
//! Numeric preset fields (bitrates, GOP size, dimensions) are kept as decimal
//! strings, the way upstream systems serialize them. Providers are
//! responsible for parsing them when translating a preset into their own
//! wire format.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical encoding recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preset {
    /// Unique preset name. Required.
    pub name: String,
    pub description: String,
    /// Output container, e.g. `mp4`, `webm`, `m3u8`.
    pub container: String,
    /// `VBR`, `CBR` or a provider-specific value.
    pub rate_control: String,
    pub video: VideoPreset,
    pub audio: AudioPreset,
}

/// Video half of a [`Preset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoPreset {
    pub profile: String,
    pub profile_level: String,
    /// Bits per second.
    pub bitrate: String,
    pub codec: String,
    /// `fixed` pins keyframes to `gop_size`.
    pub gop_mode: String,
    /// Frames between keyframes.
    pub gop_size: String,
    /// Empty or `0` leaves the choice to the provider.
    pub width: String,
    /// Empty or `0` leaves the choice to the provider.
    pub height: String,
}

/// Audio half of a [`Preset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioPreset {
    /// Bits per second.
    pub bitrate: String,
    pub codec: String,
}

/// A preset persisted locally under its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalPreset {
    pub name: String,
    pub preset: Preset,
}

impl LocalPreset {
    /// Wrap `preset`, keyed by its own name.
    pub fn new(preset: Preset) -> Self {
        Self {
            name: preset.name.clone(),
            preset,
        }
    }
}

/// Maps a canonical preset name to the token each provider knows it by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresetMap {
    pub name: String,
    pub provider_mapping: HashMap<String, String>,
    #[serde(rename = "output")]
    pub output_opts: OutputOptions,
}

impl PresetMap {
    /// Token registered for `provider`, if any.
    pub fn provider_token(&self, provider: &str) -> Option<&str> {
        self.provider_mapping.get(provider).map(String::as_str)
    }
}

/// Output options attached to a [`PresetMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    pub extension: String,
}
