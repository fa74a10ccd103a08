use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tuning for the gesture classifier.
///
/// All knobs are fixed at construction; the defaults were tuned against a
/// 640x480 webcam feed and are not guaranteed optimal for other setups, which
/// is why every one of them is exposed here instead of being hard-coded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum dominant-axis displacement for a swipe, as a fraction of the
    /// frame. Displacement exactly at the threshold is accepted.
    pub swipe_threshold: f32,
    /// Minimum swipe speed in frame-fractions per second. Speed exactly at
    /// the threshold is accepted.
    pub swipe_speed_threshold: f32,
    /// Minimum time between two accepted gestures, shared by the swipe and
    /// pointing detectors
    pub swipe_cooldown: Duration,
    /// How far back position samples count toward a swipe
    pub history_window: Duration,
    /// Try swipe detection before pose detection; false means pointing-only
    pub use_swipe: bool,
    /// Margin separating an extended fingertip from a folded one, in
    /// normalized units. Keeps poses from flickering at the boundary.
    pub extension_margin: f32,
    /// Vertical margin the thumb tip must clear past its IP joint for a
    /// thumbs-up or thumbs-down
    pub thumb_margin: f32,
    /// Minimum hand-detection confidence, passed through to the landmark source
    pub min_detection_confidence: f32,
    /// Minimum hand-tracking confidence, passed through to the landmark source
    pub min_tracking_confidence: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 0.05,
            swipe_speed_threshold: 0.02,
            swipe_cooldown: Duration::from_millis(300),
            history_window: Duration::from_millis(500),
            use_swipe: true,
            extension_margin: 0.02,
            thumb_margin: 0.05,
            min_detection_confidence: 0.6,
            min_tracking_confidence: 0.6,
        }
    }
}

impl GestureConfig {
    /// Configuration with swipe detection disabled
    pub fn pointing_only() -> Self {
        Self {
            use_swipe: false,
            ..Default::default()
        }
    }
}
