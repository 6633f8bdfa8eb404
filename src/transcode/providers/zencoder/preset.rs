//! Translation of canonical presets into Zencoder output settings.
//!
//! Canonical bitrates are bits per second; Zencoder expects kilobits per
//! second. The division truncates, so `"3500000"` becomes `3500` and
//! `"128999"` becomes `128`.

use std::str::FromStr;

use encodeforge_common::Preset;

use super::resolution::resolve;
use super::types::OutputSettings;

/// Zencoder deinterlaces every output.
const DEINTERLACE: &str = "on";

/// Parse a numeric preset field. Empty or non-numeric input yields zero.
pub(crate) fn parse_or_zero<T: FromStr + Default>(value: &str) -> T {
    value.trim().parse().unwrap_or_default()
}

/// Translate `preset` into output settings without destination fields.
pub fn translate(preset: &Preset) -> OutputSettings {
    let video = &preset.video;
    let (width, height) = resolve(preset);
    let h264 = is_h264_family(&video.codec);

    OutputSettings {
        label: Some(format!("{}:{}", preset.name, preset.description)),
        format: non_empty(&preset.container),
        video_codec: non_empty(&video.codec),
        h264_profile: h264.then(|| non_empty(&video.profile)).flatten(),
        h264_level: h264.then(|| non_empty(&video.profile_level)).flatten(),
        audio_codec: non_empty(&preset.audio.codec),
        width: non_zero(width),
        height: non_zero(height),
        video_bitrate: non_zero(kbps(&video.bitrate)),
        audio_bitrate: non_zero(kbps(&preset.audio.bitrate)),
        keyframe_interval: non_zero(parse_or_zero(&video.gop_size)),
        fixed_keyframe_interval: (video.gop_mode == "fixed").then_some(true),
        constant_bitrate: (preset.rate_control == "CBR").then_some(true),
        deinterlace: Some(DEINTERLACE.to_string()),
        ..Default::default()
    }
}

fn kbps(bits_per_second: &str) -> u64 {
    parse_or_zero::<u64>(bits_per_second) / 1000
}

fn is_h264_family(codec: &str) -> bool {
    matches!(
        codec.to_ascii_lowercase().as_str(),
        "h264" | "avc" | "avc1" | "x264" | "libx264"
    )
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn non_zero<T: Default + PartialEq>(value: T) -> Option<T> {
    (value != T::default()).then_some(value)
}
