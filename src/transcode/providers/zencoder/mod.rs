//! Zencoder transcoding provider.
//!
//! Implements [`TranscodeProvider`] on top of the Zencoder API v2:
//! - canonical presets are stored locally and translated into Zencoder
//!   output settings at submission time;
//! - every output of a profile goes into a single remote job;
//! - statuses are rebuilt from the job details and progress documents on
//!   every query.

pub mod client;
pub mod destination;
pub mod job_status;
pub mod output;
pub mod preset;
pub mod resolution;
pub mod status;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use encodeforge_common::{
    Capabilities, Error, Job, JobStatus, LocalPreset, Preset, PresetMap, Result, Status,
    TranscodeProfile,
};
use tracing::{debug, info};

pub use client::{HttpZencoderClient, ZencoderTransport};
pub use types::{CreateJobRequest, CreateJobResponse, JobProgress, OutputSettings, RawJobStatus};

use crate::config::{Config, ZencoderConfig};
use crate::transcode::presets::LocalPresetStore;
use crate::transcode::provider::TranscodeProvider;

/// Name the provider is registered under and keyed by in preset maps.
pub const NAME: &str = "zencoder";

const INPUT_FORMATS: &[&str] = &["prores", "h264"];
const OUTPUT_FORMATS: &[&str] = &["mp4", "hls", "webm"];
const DESTINATIONS: &[&str] = &["akamai", "s3"];

/// [`ProviderFactory`](crate::transcode::ProviderFactory) for Zencoder.
///
/// Fails with [`Error::InvalidConfig`] when the `[zencoder]` section is
/// missing or has no API key.
pub fn factory(config: &Config, presets: LocalPresetStore) -> Result<Arc<dyn TranscodeProvider>> {
    let zencoder = config
        .zencoder
        .as_ref()
        .ok_or_else(|| Error::invalid_config("missing Zencoder configuration"))?;
    Ok(Arc::new(ZencoderProvider::from_config(zencoder.clone(), presets)?))
}

pub struct ZencoderProvider {
    config: ZencoderConfig,
    client: Arc<dyn ZencoderTransport>,
    presets: LocalPresetStore,
}

impl ZencoderProvider {
    /// Create a provider talking to Zencoder through `client`.
    pub fn new(
        config: ZencoderConfig,
        client: Arc<dyn ZencoderTransport>,
        presets: LocalPresetStore,
    ) -> Self {
        Self {
            config,
            client,
            presets,
        }
    }

    /// Create a provider using the HTTP client described by `config`.
    pub fn from_config(config: ZencoderConfig, presets: LocalPresetStore) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::invalid_config("missing Zencoder API key"));
        }
        let client = Arc::new(HttpZencoderClient::new(&config));
        Ok(Self::new(config, client, presets))
    }

    /// Output settings for `file_name` of `job` encoded with `preset`,
    /// written under the configured destination.
    pub fn build_output(&self, job: &Job, preset: &Preset, file_name: &str) -> Result<OutputSettings> {
        output::build_output(&self.config.destination, job, preset, file_name)
    }

    /// Canonical preset an output's preset map points at.
    ///
    /// The Zencoder token is tried as a local preset name first, then the
    /// map's own name.
    fn resolve_preset(&self, map: &PresetMap) -> Result<Preset> {
        let token = map
            .provider_token(NAME)
            .ok_or_else(|| Error::PresetMapNotFound(map.name.clone()))?;

        match self.presets.get(token) {
            Ok(local) => Ok(local.preset),
            Err(Error::LocalPresetNotFound) if token != map.name => {
                debug!(token = %token, preset = %map.name, "No local preset for token, using map name");
                self.presets.get(&map.name).map(|local| local.preset)
            }
            Err(e) => Err(e),
        }
    }

    fn build_request(&self, job: &Job, profile: &TranscodeProfile) -> Result<CreateJobRequest> {
        if profile.source_media.trim().is_empty() {
            return Err(Error::invalid_input("transcode profile has no source media"));
        }
        if profile.outputs.is_empty() {
            return Err(Error::invalid_input("transcode profile has no outputs"));
        }

        let outputs = profile
            .outputs
            .iter()
            .map(|out| {
                let preset = self.resolve_preset(&out.preset)?;
                let mut settings = self.build_output(job, &preset, &out.file_name)?;
                output::apply_streaming_params(&mut settings, &preset, &profile.streaming_params);
                Ok(settings)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CreateJobRequest {
            input: profile.source_media.clone(),
            outputs,
        })
    }
}

#[async_trait]
impl TranscodeProvider for ZencoderProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn create_preset(&self, preset: Preset) -> Result<String> {
        self.presets.create(preset)
    }

    fn get_preset(&self, name: &str) -> Result<LocalPreset> {
        self.presets.get(name)
    }

    fn delete_preset(&self, name: &str) -> Result<()> {
        self.presets.delete(name)
    }

    fn list_presets(&self) -> Result<Vec<LocalPreset>> {
        self.presets.list()
    }

    async fn transcode(&self, job: &mut Job, profile: &TranscodeProfile) -> Result<JobStatus> {
        let request = self.build_request(job, profile)?;
        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Ok(body) = serde_json::to_string(&request) {
                debug!(job_id = %job.id, body = %body, "Zencoder job request");
            }
        }

        let response = self.client.create_job(&request).await?;
        job.provider_name = NAME.to_string();
        job.provider_job_id = response.id.to_string();
        info!(
            job_id = %job.id,
            provider_job_id = %job.provider_job_id,
            outputs = request.outputs.len(),
            "Submitted Zencoder job"
        );

        Ok(JobStatus {
            provider_name: NAME.to_string(),
            provider_job_id: job.provider_job_id.clone(),
            status: Status::Queued,
            ..Default::default()
        })
    }

    async fn job_status(&self, job: &Job) -> Result<JobStatus> {
        if job.provider_job_id.is_empty() {
            return Err(Error::invalid_input("job has not been submitted"));
        }
        let raw = self.client.fetch_status(&job.provider_job_id).await?;
        job_status::assemble(&job.provider_job_id, raw)
    }

    async fn cancel_job(&self, provider_job_id: &str) -> Result<()> {
        self.client.cancel_job(provider_job_id).await?;
        info!(provider_job_id = %provider_job_id, "Cancelled Zencoder job");
        Ok(())
    }

    async fn healthcheck(&self) -> Result<()> {
        self.client.ping().await
    }

    fn capabilities(&self) -> Capabilities {
        capabilities()
    }
}

/// What Zencoder accepts and where it delivers.
pub fn capabilities() -> Capabilities {
    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    Capabilities {
        input_formats: owned(INPUT_FORMATS),
        output_formats: owned(OUTPUT_FORMATS),
        destinations: owned(DESTINATIONS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use encodeforge_db::MemoryPresetRepository;

    fn store() -> LocalPresetStore {
        LocalPresetStore::new(Arc::new(MemoryPresetRepository::new()))
    }

    #[test]
    fn factory_requires_section() {
        assert_matches!(
            factory(&Config::default(), store()).err(),
            Some(Error::InvalidConfig(_))
        );
    }

    #[test]
    fn factory_requires_api_key() {
        let config = Config {
            zencoder: Some(ZencoderConfig::new("", "s3://bucket/")),
            ..Default::default()
        };
        assert_matches!(factory(&config, store()).err(), Some(Error::InvalidConfig(_)));
    }

    #[test]
    fn factory_builds_provider() {
        let config = Config {
            zencoder: Some(ZencoderConfig::new("api-key-here", "s3://bucket/")),
            ..Default::default()
        };
        let provider = factory(&config, store()).unwrap();
        assert_eq!(provider.name(), NAME);
    }

    #[test]
    fn static_capabilities() {
        assert_eq!(
            capabilities(),
            Capabilities {
                input_formats: vec!["prores".into(), "h264".into()],
                output_formats: vec!["mp4".into(), "hls".into(), "webm".into()],
                destinations: vec!["akamai".into(), "s3".into()],
            }
        );
    }
}
