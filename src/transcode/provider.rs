//! The [`TranscodeProvider`] trait every encoding backend implements.

use async_trait::async_trait;
use encodeforge_common::{
    Capabilities, Job, JobStatus, LocalPreset, Preset, Result, TranscodeProfile,
};

/// Operations a job orchestrator performs against one remote encoding
/// service.
///
/// Implementations hold no per-job state: the remote service owns the job
/// lifecycle, so every call is a function of its arguments plus the
/// configuration fixed at construction.
#[async_trait]
pub trait TranscodeProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"zencoder"`).
    fn name(&self) -> &'static str;

    /// Store `preset` locally and return its name.
    fn create_preset(&self, preset: Preset) -> Result<String>;

    fn get_preset(&self, name: &str) -> Result<LocalPreset>;

    /// Remove a local preset. Absent presets are not an error.
    fn delete_preset(&self, name: &str) -> Result<()>;

    fn list_presets(&self) -> Result<Vec<LocalPreset>>;

    /// Submit every output of `profile` as one remote job.
    ///
    /// On success `job.provider_job_id` and `job.provider_name` are filled
    /// in and the initial status is returned.
    async fn transcode(&self, job: &mut Job, profile: &TranscodeProfile) -> Result<JobStatus>;

    /// Current status of a submitted job.
    async fn job_status(&self, job: &Job) -> Result<JobStatus>;

    async fn cancel_job(&self, provider_job_id: &str) -> Result<()>;

    /// Check that the remote service is reachable with the configured
    /// credentials.
    async fn healthcheck(&self) -> Result<()>;

    /// Static declaration of supported formats and destinations.
    fn capabilities(&self) -> Capabilities;
}
