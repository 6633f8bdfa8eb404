use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Zencoder provider settings. The provider is unavailable without them.
    #[serde(default)]
    pub zencoder: Option<ZencoderConfig>,

    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZencoderConfig {
    pub api_key: String,

    /// Base URL template outputs are written under. May embed credentials,
    /// e.g. `s3://key:secret@bucket/prefix/`.
    #[serde(default)]
    pub destination: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout for API calls (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://app.zencoder.com/api/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl ZencoderConfig {
    /// Settings with defaults for everything but the credentials.
    pub fn new<K: Into<String>, D: Into<String>>(api_key: K, destination: D) -> Self {
        Self {
            api_key: api_key.into(),
            destination: destination.into(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite file for local presets. Loading fills in `encodeforge.db` next
    /// to the config file when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
