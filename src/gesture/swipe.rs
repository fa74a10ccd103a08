//! Swipe detection: a fast, directionally coherent displacement of the hand's
//! reference point over a short time window.

use std::collections::VecDeque;
use std::time::Duration;

use super::config::GestureConfig;
use super::landmarks::LandmarkPoint;
use crate::game::Direction;

/// Hard cap on retained samples, enough to cover the detection window at
/// typical camera frame rates
const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy)]
struct Sample {
    at: Duration,
    point: LandmarkPoint,
}

/// Bounded, time-ordered buffer of recent hand reference points.
///
/// Owned exclusively by one classifier. Samples older than the detection
/// window are evicted on every observation; the whole buffer is cleared when
/// the hand disappears and when a swipe is accepted.
#[derive(Debug, Default)]
pub struct PositionHistory {
    samples: VecDeque<Sample>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Record the reference point for the current frame, evicting samples
    /// that have aged out of the detection window
    pub fn observe(&mut self, point: LandmarkPoint, at: Duration, window: Duration) {
        let horizon = at.saturating_sub(window);
        while self
            .samples
            .front()
            .is_some_and(|sample| sample.at < horizon)
        {
            self.samples.pop_front();
        }
        if self.samples.len() == HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { at, point });
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn oldest(&self) -> Option<Sample> {
        self.samples.front().copied()
    }

    fn newest(&self) -> Option<Sample> {
        self.samples.back().copied()
    }
}

/// Classify the motion currently held in `history` as a swipe.
///
/// Pure with respect to the buffer: acceptance bookkeeping (clearing the
/// history, arming the cooldown) is the caller's job. Returns `None` when the
/// motion is too short, too slow, or the buffer holds fewer than two distinct
/// instants.
pub fn detect_swipe(history: &PositionHistory, config: &GestureConfig) -> Option<Direction> {
    let oldest = history.oldest()?;
    let newest = history.newest()?;

    let dt = newest.at.saturating_sub(oldest.at).as_secs_f32();
    if dt <= f32::EPSILON {
        // Single sample or same-instant pair: no speed to measure
        return None;
    }

    let dx = newest.point.x - oldest.point.x;
    let dy = newest.point.y - oldest.point.y;
    let dominant = dx.abs().max(dy.abs());

    if dominant < config.swipe_threshold {
        return None;
    }
    if dominant / dt < config.swipe_speed_threshold {
        return None;
    }

    // Strict |dx| > |dy| takes the horizontal branch; an exact tie resolves
    // to vertical. dy < 0 is Up under the image convention.
    Some(if dx.abs() > dy.abs() {
        if dx < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if dy < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(samples: &[(f64, f32, f32)]) -> PositionHistory {
        let mut history = PositionHistory::new();
        for &(t, x, y) in samples {
            history.observe(
                LandmarkPoint::new(x, y),
                Duration::from_secs_f64(t),
                Duration::from_millis(500),
            );
        }
        history
    }

    #[test]
    fn test_upward_swipe() {
        // dy = -0.20 over 0.15s: well past both thresholds
        let history = history_of(&[(0.0, 0.40, 0.50), (0.15, 0.40, 0.30)]);
        let config = GestureConfig::default();
        assert_eq!(detect_swipe(&history, &config), Some(Direction::Up));
    }

    #[test]
    fn test_axis_dominance() {
        // dx = 0.10, dy = 0.01 over 0.2s must classify as Right, never Up/Down
        let history = history_of(&[(0.0, 0.40, 0.50), (0.2, 0.50, 0.51)]);
        let config = GestureConfig::default();
        assert_eq!(detect_swipe(&history, &config), Some(Direction::Right));
    }

    #[test]
    fn test_leftward_and_downward() {
        let config = GestureConfig::default();

        let left = history_of(&[(0.0, 0.60, 0.50), (0.15, 0.40, 0.50)]);
        assert_eq!(detect_swipe(&left, &config), Some(Direction::Left));

        let down = history_of(&[(0.0, 0.40, 0.30), (0.15, 0.40, 0.50)]);
        assert_eq!(detect_swipe(&down, &config), Some(Direction::Down));
    }

    #[test]
    fn test_axis_tie_resolves_vertical() {
        // |dx| == |dy| goes to the vertical branch
        let history = history_of(&[(0.0, 0.40, 0.50), (0.15, 0.50, 0.40)]);
        let config = GestureConfig::default();
        assert_eq!(detect_swipe(&history, &config), Some(Direction::Up));
    }

    #[test]
    fn test_displacement_below_threshold_rejected() {
        let history = history_of(&[(0.0, 0.40, 0.50), (0.15, 0.44, 0.50)]);
        let config = GestureConfig::default();
        assert_eq!(detect_swipe(&history, &config), None);
    }

    #[test]
    fn test_exact_threshold_accepted() {
        // Displacement exactly at swipe_threshold with speed at the speed
        // threshold: both boundaries are inclusive
        let config = GestureConfig {
            swipe_threshold: 0.0625,
            swipe_speed_threshold: 0.25,
            ..Default::default()
        };
        let history = history_of(&[(0.0, 0.5, 0.5), (0.25, 0.5625, 0.5)]);
        assert_eq!(detect_swipe(&history, &config), Some(Direction::Right));
    }

    #[test]
    fn test_speed_below_threshold_rejected() {
        // Large displacement but delivered too slowly
        let config = GestureConfig {
            swipe_speed_threshold: 1.0,
            history_window: Duration::from_secs(10),
            ..Default::default()
        };
        let mut history = PositionHistory::new();
        history.observe(
            LandmarkPoint::new(0.2, 0.5),
            Duration::from_secs(0),
            config.history_window,
        );
        history.observe(
            LandmarkPoint::new(0.4, 0.5),
            Duration::from_secs(2),
            config.history_window,
        );
        assert_eq!(detect_swipe(&history, &config), None);
    }

    #[test]
    fn test_degenerate_timing_rejected() {
        let config = GestureConfig::default();

        let single = history_of(&[(0.0, 0.40, 0.50)]);
        assert_eq!(detect_swipe(&single, &config), None);

        // Two samples at the same instant must not divide by zero
        let stacked = history_of(&[(0.1, 0.40, 0.50), (0.1, 0.60, 0.50)]);
        assert_eq!(detect_swipe(&stacked, &config), None);
    }

    #[test]
    fn test_empty_history() {
        let history = PositionHistory::new();
        assert_eq!(detect_swipe(&history, &GestureConfig::default()), None);
    }

    #[test]
    fn test_age_eviction() {
        let window = Duration::from_millis(500);
        let mut history = PositionHistory::new();
        history.observe(LandmarkPoint::new(0.1, 0.5), Duration::from_millis(0), window);
        history.observe(LandmarkPoint::new(0.2, 0.5), Duration::from_millis(400), window);
        assert_eq!(history.len(), 2);

        // The t=0 sample ages out once the window has moved past it
        history.observe(LandmarkPoint::new(0.3, 0.5), Duration::from_millis(600), window);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_capacity_bound() {
        let window = Duration::from_secs(60);
        let mut history = PositionHistory::new();
        for i in 0..25 {
            history.observe(
                LandmarkPoint::new(0.5, 0.5),
                Duration::from_millis(i * 30),
                window,
            );
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }
}
