//! Output resolution from a preset's free-form dimension fields.

use encodeforge_common::Preset;

use super::preset::parse_or_zero;

/// Effective `(width, height)` of `preset`.
///
/// Each dimension is parsed on its own; empty, zero or unparsable values
/// resolve to 0, which lets Zencoder pick that dimension (usually keeping
/// the source aspect ratio).
pub fn resolve(preset: &Preset) -> (u32, u32) {
    (
        parse_or_zero(&preset.video.width),
        parse_or_zero(&preset.video.height),
    )
}
