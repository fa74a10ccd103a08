//! Per-frame composition of the two detection strategies: swipe first, pose
//! as fallback, one shared cooldown debouncing acceptances from either.

use std::time::Duration;

use super::config::GestureConfig;
use super::landmarks::HandFrame;
use super::pose::classify_pose;
use super::swipe::{PositionHistory, detect_swipe};
use crate::game::Direction;

/// Stateful gesture-to-direction classifier.
///
/// Call [`classify`](Self::classify) once per camera frame with a
/// monotonically nondecreasing timestamp. All mutable state (the position
/// history and the cooldown timer) lives here, confined to the owning thread.
pub struct GestureClassifier {
    config: GestureConfig,
    history: PositionHistory,
    last_accept: Option<Duration>,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            history: PositionHistory::new(),
            last_accept: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Classify the current frame.
    ///
    /// `None` covers every non-detection outcome: no hand visible, no
    /// recognized gesture, or a detection suppressed by the cooldown. A lost
    /// hand clears the position history, so a later swipe needs fresh motion.
    pub fn classify(&mut self, frame: Option<&HandFrame>, now: Duration) -> Option<Direction> {
        let Some(frame) = frame else {
            self.history.clear();
            return None;
        };

        self.history
            .observe(frame.wrist(), now, self.config.history_window);

        if self.config.use_swipe {
            if let Some(direction) = detect_swipe(&self.history, &self.config) {
                if self.in_cooldown(now) {
                    // A real swipe, just debounced. Do not fall through to
                    // the pose detector for the same frame.
                    return None;
                }
                // One motion fires once: drop the samples that produced it
                self.history.clear();
                self.last_accept = Some(now);
                return Some(direction);
            }
        }

        let direction = classify_pose(frame, &self.config)?;
        if self.in_cooldown(now) {
            return None;
        }
        self.last_accept = Some(now);
        Some(direction)
    }

    fn in_cooldown(&self, now: Duration) -> bool {
        self.last_accept
            .is_some_and(|at| now.saturating_sub(at) < self.config.swipe_cooldown)
    }
}
