//! Canonical job status from Zencoder job details and progress.

use std::time::Duration;

use encodeforge_common::{Error, JobOutput, JobStatus, OutputFile, Result, SourceInfo, Status};
use reqwest::Url;
use tracing::warn;

use super::status::map_status;
use super::types::{JobDetails, MediaFile, RawJobStatus};
use super::NAME;

/// Build the [`JobStatus`] of `provider_job_id` from what the remote
/// returned.
///
/// The raw job document is passed through as the provider status. The
/// state comes from the progress document, falling back to the job's own
/// state when progress carries none. Output files keep the remote order.
pub fn assemble(provider_job_id: &str, raw: RawJobStatus) -> Result<JobStatus> {
    let details: JobDetails = serde_json::from_value(serde_json::Value::Object(raw.job.clone()))
        .map_err(|e| Error::transport(format!("malformed job document: {e}")))?;

    let state = if raw.progress.state.is_empty() {
        details.state.clone().unwrap_or_default()
    } else {
        raw.progress.state.clone()
    };
    let status = map_status(&state);
    if status == Status::Failed && state != "failed" {
        warn!(job_id = provider_job_id, state = %state, "Unrecognized Zencoder state, reporting failure");
    }

    let outputs = details.output_media_files.unwrap_or_default();

    Ok(JobStatus {
        provider_name: NAME.to_string(),
        provider_job_id: provider_job_id.to_string(),
        status,
        progress: percent(raw.progress.progress),
        source_info: source_info(details.input_media_file.unwrap_or_default()),
        provider_status: raw.job,
        output: JobOutput {
            destination: destination(&outputs),
            files: outputs.into_iter().map(output_file).collect(),
        },
    })
}

/// Progress as a percentage in `0..=100`; non-finite values read as 0.
fn percent(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn source_info(input: MediaFile) -> SourceInfo {
    SourceInfo {
        duration: Duration::from_millis(input.duration_in_ms.unwrap_or_default()),
        width: input.width.unwrap_or_default(),
        height: input.height.unwrap_or_default(),
        video_codec: input.video_codec.unwrap_or_default(),
    }
}

fn output_file(file: MediaFile) -> OutputFile {
    OutputFile {
        path: file.url.unwrap_or_default(),
        container: file.format.unwrap_or_default(),
        video_codec: file.video_codec.unwrap_or_default(),
        width: file.width.unwrap_or_default(),
        height: file.height.unwrap_or_default(),
    }
}

/// Directory part of the first output's URL path.
fn destination(outputs: &[MediaFile]) -> String {
    let Some(url) = outputs.first().and_then(|f| f.url.as_deref()) else {
        return String::new();
    };
    let path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string());

    match path.rfind('/') {
        Some(0) => "/".to_string(),
        Some(idx) => path[..idx].to_string(),
        None => String::new(),
    }
}
