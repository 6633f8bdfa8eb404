//! Zencoder API v2 wire types.
//!
//! Field names are part of the compatibility surface with the remote
//! service. Optional output fields are omitted from the JSON entirely when
//! unset; Zencoder treats an explicit `null` differently from a missing key.

use serde::{Deserialize, Deserializer, Serialize};

/// One output of a job submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// `segmented` for HLS outputs.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h264_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h264_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Kilobits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_bitrate: Option<u64>,
    /// Kilobits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_bitrate: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyframe_interval: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_keyframe_interval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant_bitrate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deinterlace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Body of `POST /jobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub input: String,
    pub outputs: Vec<OutputSettings>,
}

/// Response of `POST /jobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobResponse {
    pub id: i64,
    #[serde(default)]
    pub outputs: Vec<CreatedOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOutput {
    pub id: i64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Everything the remote reports about a job, as fetched by the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawJobStatus {
    /// The `job` object of `GET /jobs/{id}.json`, untouched.
    pub job: serde_json::Map<String, serde_json::Value>,
    pub progress: JobProgress,
}

/// Response of `GET /jobs/{id}/progress.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobProgress {
    #[serde(default)]
    pub state: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub progress: f64,
}

/// Typed view over the fields of [`RawJobStatus::job`] this crate reads.
/// Zencoder sends `null` for unknown values, hence all the options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct JobDetails {
    pub state: Option<String>,
    pub input_media_file: Option<MediaFile>,
    pub output_media_files: Option<Vec<MediaFile>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct MediaFile {
    pub url: Option<String>,
    pub format: Option<String>,
    pub video_codec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub duration_in_ms: Option<u64>,
}

/// Progress arrives as a JSON number or as a decimal string depending on
/// the job state. Anything that is not a finite number reads as 0.
fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    let progress = match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::String(s)) => s.trim().parse().ok(),
        None => None,
    };
    Ok(progress.filter(|p: &f64| p.is_finite()).unwrap_or(0.0))
}
