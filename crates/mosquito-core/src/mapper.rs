use crate::constants::{CLOSE_RADIUS_PX, DETECTION_RADIUS_PX};
use crate::settings::AudioSettings;
use glam::Vec2;

/// Map a pointer distance (pixels) to a tone frequency (Hz).
///
/// Linear and inverted: distance 0 gives `max_frequency`, anything at or beyond
/// the detection radius gives `min_frequency`.
#[inline]
pub fn map_distance_to_frequency(distance: f32, settings: &AudioSettings) -> u32 {
    let clamped = distance.clamp(0.0, DETECTION_RADIUS_PX);
    let normalized = clamped / DETECTION_RADIUS_PX;
    let max = settings.max_frequency as f32;
    let min = settings.min_frequency as f32;
    let freq = max - normalized * (max - min);
    freq.round().max(0.0) as u32
}

#[inline]
pub fn pointer_distance(pointer: Vec2, target: Vec2) -> f32 {
    pointer.distance(target)
}

#[inline]
pub fn in_detection_zone(distance: f32) -> bool {
    distance <= DETECTION_RADIUS_PX
}

#[inline]
pub fn is_close(distance: f32) -> bool {
    distance <= CLOSE_RADIUS_PX
}
