//! Static pose classification: maps a single hand frame to a direction
//! without regard to motion. Pure function of the frame; the classifier
//! provides debouncing.

use super::config::GestureConfig;
use super::landmarks::{
    HandFrame, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP,
    RING_TIP, THUMB_IP, THUMB_MCP, THUMB_TIP, WRIST,
};
use crate::game::Direction;

/// Classify a held hand pose.
///
/// Rules are evaluated in a fixed priority order, first match wins:
/// fist, thumbs-up, thumbs-down, peace sign, single-finger point.
pub fn classify_pose(frame: &HandFrame, config: &GestureConfig) -> Option<Direction> {
    let margin = config.extension_margin;
    let index = finger_extended(frame, INDEX_TIP, INDEX_PIP, margin);
    let middle = finger_extended(frame, MIDDLE_TIP, MIDDLE_PIP, margin);
    let ring = finger_extended(frame, RING_TIP, RING_PIP, margin);
    let pinky = finger_extended(frame, PINKY_TIP, PINKY_PIP, margin);
    let thumb = thumb_extended(frame, config);
    let fingers_folded = !index && !middle && !ring && !pinky;

    // Fist: everything folded, thumb included
    if fingers_folded && !thumb {
        return Some(Direction::Down);
    }

    // Thumbs up/down: fingers folded, thumb tip clearly past its IP joint
    if fingers_folded {
        let rise = frame.point(THUMB_IP).y - frame.point(THUMB_TIP).y;
        if rise > config.thumb_margin {
            return Some(Direction::Up);
        }
        if rise < -config.thumb_margin {
            return Some(Direction::Down);
        }
    }

    // Peace sign: index and middle up, ring and pinky folded
    if index && middle && !ring && !pinky {
        return Some(Direction::Up);
    }

    // Single-finger point: direction of the wrist -> index-tip vector along
    // its dominant axis, same convention as the swipe detector (tie goes
    // vertical, dy < 0 is Up)
    if index && !middle && !ring && !pinky {
        let wrist = frame.point(WRIST);
        let tip = frame.point(INDEX_TIP);
        let dx = tip.x - wrist.x;
        let dy = tip.y - wrist.y;
        return Some(if dx.abs() > dy.abs() {
            if dx < 0.0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if dy < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        });
    }

    None
}

/// A fingertip above its middle knuckle (smaller y) by more than the margin
/// counts as extended
fn finger_extended(frame: &HandFrame, tip: usize, pip: usize, margin: f32) -> bool {
    frame.point(tip).y < frame.point(pip).y - margin
}

/// The thumb can extend sideways (open hand) or vertically (thumbs up/down),
/// so it counts as extended when its tip clears the IP joint on either axis.
/// Which x side counts as outward depends on which side of the wrist the
/// thumb sits on.
fn thumb_extended(frame: &HandFrame, config: &GestureConfig) -> bool {
    let wrist = frame.point(WRIST);
    let mcp = frame.point(THUMB_MCP);
    let ip = frame.point(THUMB_IP);
    let tip = frame.point(THUMB_TIP);

    let sideways = if mcp.x < wrist.x {
        tip.x > ip.x + config.extension_margin
    } else {
        tip.x < ip.x - config.extension_margin
    };
    let vertical = (tip.y - ip.y).abs() > config.thumb_margin;
    sideways || vertical
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::landmarks::{LANDMARK_COUNT, LandmarkPoint};

    /// Build a frame with a neutral open-hand layout, then override
    /// individual landmarks
    fn frame_with(overrides: &[(usize, f32, f32)]) -> HandFrame {
        // Neutral: wrist low, knuckles mid, all fingertips folded just below
        // their PIP joints, thumb tucked in
        let mut points = [LandmarkPoint::new(0.5, 0.5); LANDMARK_COUNT];
        points[WRIST] = LandmarkPoint::new(0.50, 0.80);
        points[THUMB_MCP] = LandmarkPoint::new(0.42, 0.70);
        points[THUMB_IP] = LandmarkPoint::new(0.40, 0.65);
        points[THUMB_TIP] = LandmarkPoint::new(0.41, 0.64);
        for (pip, tip, x) in [
            (INDEX_PIP, INDEX_TIP, 0.46),
            (MIDDLE_PIP, MIDDLE_TIP, 0.50),
            (RING_PIP, RING_TIP, 0.54),
            (PINKY_PIP, PINKY_TIP, 0.58),
        ] {
            points[pip] = LandmarkPoint::new(x, 0.55);
            points[tip] = LandmarkPoint::new(x, 0.60);
        }
        for &(idx, x, y) in overrides {
            points[idx] = LandmarkPoint::new(x, y);
        }
        HandFrame::new(&points).unwrap()
    }

    #[test]
    fn test_fist_is_down() {
        let frame = frame_with(&[]);
        let config = GestureConfig::default();
        assert_eq!(classify_pose(&frame, &config), Some(Direction::Down));
    }

    #[test]
    fn test_thumbs_up() {
        // Thumb extended outward (past IP on the thumb side) and well above
        // its IP joint; fingers stay folded
        let frame = frame_with(&[(THUMB_IP, 0.40, 0.65), (THUMB_TIP, 0.36, 0.50)]);
        let config = GestureConfig::default();
        assert_eq!(classify_pose(&frame, &config), Some(Direction::Up));
    }

    #[test]
    fn test_thumbs_down() {
        let frame = frame_with(&[(THUMB_IP, 0.40, 0.65), (THUMB_TIP, 0.36, 0.78)]);
        let config = GestureConfig::default();
        assert_eq!(classify_pose(&frame, &config), Some(Direction::Down));
    }

    #[test]
    fn test_peace_is_up() {
        let frame = frame_with(&[(INDEX_TIP, 0.46, 0.40), (MIDDLE_TIP, 0.50, 0.38)]);
        let config = GestureConfig::default();
        assert_eq!(classify_pose(&frame, &config), Some(Direction::Up));
    }

    #[test]
    fn test_point_up() {
        let frame = frame_with(&[(INDEX_TIP, 0.50, 0.30)]);
        let config = GestureConfig::default();
        assert_eq!(classify_pose(&frame, &config), Some(Direction::Up));
    }

    #[test]
    fn test_point_left_and_right() {
        let config = GestureConfig::default();

        // Index extended and offset far to one side of the wrist
        let left = frame_with(&[(INDEX_TIP, 0.10, 0.52)]);
        assert_eq!(classify_pose(&left, &config), Some(Direction::Left));

        let right = frame_with(&[(INDEX_TIP, 0.90, 0.52)]);
        assert_eq!(classify_pose(&right, &config), Some(Direction::Right));
    }

    #[test]
    fn test_point_down() {
        // Index counts as extended relative to its knuckle while the whole
        // hand hangs downward, tip well below the wrist
        let frame = frame_with(&[(INDEX_PIP, 0.46, 0.95), (INDEX_TIP, 0.46, 0.90)]);
        let config = GestureConfig::default();
        assert_eq!(classify_pose(&frame, &config), Some(Direction::Down));
    }

    #[test]
    fn test_fist_priority_over_thumb_rules() {
        // Folded thumb sitting slightly above its IP joint (inside the
        // margin) must still read as a fist, not a thumbs-up: the fist rule
        // is checked first
        let frame = frame_with(&[(THUMB_TIP, 0.41, 0.62)]);
        let config = GestureConfig::default();
        assert_eq!(classify_pose(&frame, &config), Some(Direction::Down));
    }

    #[test]
    fn test_open_hand_is_no_signal() {
        // All five digits extended matches no rule
        let frame = frame_with(&[
            (THUMB_TIP, 0.34, 0.55),
            (INDEX_TIP, 0.46, 0.40),
            (MIDDLE_TIP, 0.50, 0.38),
            (RING_TIP, 0.54, 0.40),
            (PINKY_TIP, 0.58, 0.42),
        ]);
        let config = GestureConfig::default();
        assert_eq!(classify_pose(&frame, &config), None);
    }

    #[test]
    fn test_extension_margin_suppresses_flicker() {
        // A fingertip hovering just at its knuckle stays folded
        let frame = frame_with(&[(INDEX_TIP, 0.46, 0.545)]);
        let config = GestureConfig::default();
        assert_eq!(classify_pose(&frame, &config), Some(Direction::Down));
    }
}
