//! Shared test harness for integration tests.
//!
//! Provides [`FakeZencoder`], an in-process [`ZencoderTransport`] that
//! records submissions and serves a fixed job document, and
//! [`TestHarness`] which wires it into a [`ZencoderProvider`] over an
//! in-memory preset repository.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use encodeforge::config::ZencoderConfig;
use encodeforge::transcode::providers::zencoder::{
    CreateJobRequest, CreateJobResponse, JobProgress, RawJobStatus, ZencoderProvider,
    ZencoderTransport,
};
use encodeforge::transcode::LocalPresetStore;
use encodeforge_common::{AudioPreset, Error, Preset, Result, VideoPreset};
use encodeforge_db::{MemoryPresetRepository, PresetRepository};
use serde_json::json;

/// Job id the fake knows about.
pub const KNOWN_JOB_ID: &str = "1234567890";

pub const DESTINATION: &str = "http://a:b@nyt-elastictranscoder-tests.s3.amazonaws.com/t/";

#[derive(Default)]
pub struct FakeZencoder {
    pub submitted: Mutex<Vec<CreateJobRequest>>,
    pub cancelled: Mutex<Vec<String>>,
    pub unhealthy: bool,
}

impl FakeZencoder {
    pub fn unhealthy() -> Self {
        Self {
            unhealthy: true,
            ..Default::default()
        }
    }

    pub fn last_request(&self) -> Option<CreateJobRequest> {
        self.submitted.lock().unwrap().last().cloned()
    }
}

/// The `job` object Zencoder returns for [`KNOWN_JOB_ID`].
pub fn job_document() -> serde_json::Map<String, serde_json::Value> {
    let value = json!({
        "id": 1234567890,
        "state": "processing",
        "created_at": "2016-11-05T05:02:57Z",
        "updated_at": "2016-11-05T05:02:57Z",
        "submitted_at": "2016-11-05T05:02:57Z",
        "finished_at": "2016-11-05T05:02:57Z",
        "input_media_file": {
            "url": "http://nyt.net/input.mov",
            "format": "mov",
            "video_codec": "ProRes422",
            "width": 1920,
            "height": 1080,
            "duration_in_ms": 10
        },
        "output_media_files": [
            {
                "url": "http://nyt.net/output1.mp4",
                "format": "mp4",
                "video_codec": "h264",
                "width": 1920,
                "height": 1080
            },
            {
                "url": "http://nyt.net/output2.webm",
                "format": "webm",
                "video_codec": "vp8",
                "width": 1080,
                "height": 720
            }
        ]
    });
    match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[async_trait]
impl ZencoderTransport for FakeZencoder {
    async fn create_job(&self, request: &CreateJobRequest) -> Result<CreateJobResponse> {
        self.submitted.lock().unwrap().push(request.clone());
        Ok(CreateJobResponse {
            id: 123,
            outputs: Vec::new(),
        })
    }

    async fn fetch_status(&self, job_id: &str) -> Result<RawJobStatus> {
        if job_id != KNOWN_JOB_ID {
            return Err(Error::transport("job details returned 404 Not Found: "));
        }
        Ok(RawJobStatus {
            job: job_document(),
            progress: JobProgress {
                state: "processing".into(),
                progress: 10.0,
            },
        })
    }

    async fn cancel_job(&self, job_id: &str) -> Result<()> {
        if job_id != KNOWN_JOB_ID {
            return Err(Error::transport("cancel job returned 404 Not Found: "));
        }
        self.cancelled.lock().unwrap().push(job_id.to_string());
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        if self.unhealthy {
            return Err(Error::transport("account check returned 401 Unauthorized: "));
        }
        Ok(())
    }
}

pub struct TestHarness {
    pub provider: ZencoderProvider,
    pub client: Arc<FakeZencoder>,
    pub repo: Arc<dyn PresetRepository>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_client(FakeZencoder::default())
    }

    pub fn with_client(client: FakeZencoder) -> Self {
        Self::with_parts(client, Arc::new(MemoryPresetRepository::new()), DESTINATION)
    }

    pub fn with_parts(
        client: FakeZencoder,
        repo: Arc<dyn PresetRepository>,
        destination: &str,
    ) -> Self {
        let client = Arc::new(client);
        let provider = ZencoderProvider::new(
            ZencoderConfig::new("api-key-here", destination),
            client.clone(),
            LocalPresetStore::new(repo.clone()),
        );
        Self {
            provider,
            client,
            repo,
        }
    }
}

pub fn mp4_preset() -> Preset {
    Preset {
        name: "mp4_1080p".into(),
        description: "my nice preset".into(),
        container: "mp4".into(),
        rate_control: "VBR".into(),
        video: VideoPreset {
            profile: "main".into(),
            profile_level: "3.1".into(),
            bitrate: "3500000".into(),
            codec: "h264".into(),
            gop_mode: "fixed".into(),
            gop_size: "90".into(),
            height: "1080".into(),
            width: "720".into(),
        },
        audio: AudioPreset {
            bitrate: "128000".into(),
            codec: "aac".into(),
        },
    }
}

pub fn hls_preset() -> Preset {
    Preset {
        name: "hls_720p".into(),
        description: "hls preset".into(),
        container: "m3u8".into(),
        video: VideoPreset {
            bitrate: "2000000".into(),
            codec: "h264".into(),
            height: "720".into(),
            ..Default::default()
        },
        audio: AudioPreset {
            bitrate: "96000".into(),
            codec: "aac".into(),
        },
        ..Default::default()
    }
}
