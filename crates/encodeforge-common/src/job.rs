//! Transcode jobs and the canonical status model reported back to the
//! orchestrator.
//!
//! [`JobStatus`] serializes with camelCase keys and lowercase [`Status`]
//! values; pollers depend on these names, so they must not change.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::preset::PresetMap;

/// A transcode job as tracked by the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    /// Caller-assigned identifier.
    pub id: String,
    pub provider_name: String,
    /// Opaque identifier assigned by the provider after submission.
    pub provider_job_id: String,
}

impl Job {
    /// Create a job that has not been submitted yet.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// One submission spanning multiple outputs of the same source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranscodeProfile {
    /// URI or path of the source media.
    pub source_media: String,
    pub outputs: Vec<TranscodeOutput>,
    pub streaming_params: StreamingParams,
}

/// A single requested output file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranscodeOutput {
    pub file_name: String,
    pub preset: PresetMap,
}

/// Adaptive streaming parameters shared by the outputs of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamingParams {
    /// Segment length in seconds; zero leaves it to the provider.
    pub segment_duration: u32,
    /// Streaming protocol, e.g. `hls`.
    pub protocol: String,
}

/// Canonical job state. No other values are surfaced to the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Queued,
    Started,
    Finished,
    Canceled,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::Started => write!(f, "started"),
            Self::Finished => write!(f, "finished"),
            Self::Canceled => write!(f, "canceled"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Status of a submitted job, built fresh on every query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub provider_name: String,
    pub provider_job_id: String,
    pub status: Status,
    /// Percentage, 0 to 100.
    pub progress: f64,
    pub source_info: SourceInfo,
    /// Provider document passed through untouched.
    pub provider_status: serde_json::Map<String, serde_json::Value>,
    pub output: JobOutput,
}

/// Properties of the source media as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    #[serde(with = "duration_nanos")]
    pub duration: Duration,
    pub width: u32,
    pub height: u32,
    pub video_codec: String,
}

/// Where the outputs of a job landed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOutput {
    pub destination: String,
    pub files: Vec<OutputFile>,
}

/// One produced file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFile {
    pub path: String,
    pub container: String,
    pub video_codec: String,
    pub width: u32,
    pub height: u32,
}

/// Static declaration of what a provider can ingest, produce and deliver to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(rename = "input")]
    pub input_formats: Vec<String>,
    #[serde(rename = "output")]
    pub output_formats: Vec<String>,
    pub destinations: Vec<String>,
}

/// Durations travel as integer nanoseconds.
mod duration_nanos {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Status::Queued).unwrap(), json!("queued"));
        assert_eq!(serde_json::to_value(Status::Canceled).unwrap(), json!("canceled"));
        assert_eq!(Status::Started.to_string(), "started");
        assert_eq!(Status::default(), Status::Queued);
    }

    #[test]
    fn job_status_wire_keys() {
        let status = JobStatus {
            provider_name: "zencoder".into(),
            provider_job_id: "123".into(),
            status: Status::Finished,
            progress: 100.0,
            source_info: SourceInfo {
                duration: Duration::from_millis(10),
                width: 1920,
                height: 1080,
                video_codec: "ProRes422".into(),
            },
            provider_status: serde_json::Map::new(),
            output: JobOutput {
                destination: "/".into(),
                files: vec![OutputFile {
                    path: "http://example.com/out.mp4".into(),
                    container: "mp4".into(),
                    video_codec: "h264".into(),
                    width: 1920,
                    height: 1080,
                }],
            },
        };

        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(
            value,
            json!({
                "providerName": "zencoder",
                "providerJobId": "123",
                "status": "finished",
                "progress": 100.0,
                "sourceInfo": {
                    "duration": 10_000_000,
                    "width": 1920,
                    "height": 1080,
                    "videoCodec": "ProRes422"
                },
                "providerStatus": {},
                "output": {
                    "destination": "/",
                    "files": [{
                        "path": "http://example.com/out.mp4",
                        "container": "mp4",
                        "videoCodec": "h264",
                        "width": 1920,
                        "height": 1080
                    }]
                }
            })
        );

        let back: JobStatus = serde_json::from_value(value).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn capabilities_wire_keys() {
        let caps = Capabilities {
            input_formats: vec!["h264".into()],
            output_formats: vec!["mp4".into()],
            destinations: vec!["s3".into()],
        };
        assert_eq!(
            serde_json::to_value(&caps).unwrap(),
            json!({"input": ["h264"], "output": ["mp4"], "destinations": ["s3"]})
        );
    }

    #[test]
    fn job_new_is_unsubmitted() {
        let job = Job::new("job-123");
        assert_eq!(job.id, "job-123");
        assert!(job.provider_job_id.is_empty());
    }
}
