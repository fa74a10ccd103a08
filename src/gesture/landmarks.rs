//! Hand landmark frame as delivered by the landmark source.
//!
//! Coordinates are normalized to [0, 1] relative to frame width/height with the
//! origin at the top-left corner: x grows rightward, y grows downward. "Up" on
//! screen therefore means decreasing y.

use thiserror::Error;

/// Number of points in the standard hand skeleton
pub const LANDMARK_COUNT: usize = 21;

// Fixed semantic indices into a hand frame
pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// A single tracked point on the hand skeleton
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Error raised when landmark input violates the frame contract
#[derive(Debug, Error)]
pub enum LandmarkError {
    /// The source delivered the wrong number of points for one hand
    #[error("expected {LANDMARK_COUNT} hand landmarks, got {0}")]
    WrongPointCount(usize),
}

/// One detected hand: exactly [`LANDMARK_COUNT`] points with fixed indices
#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    points: [LandmarkPoint; LANDMARK_COUNT],
}

impl HandFrame {
    /// Build a frame from an ordered point slice.
    ///
    /// Fails fast on a wrong point count so downstream indexing can never go
    /// out of bounds.
    pub fn new(points: &[LandmarkPoint]) -> Result<Self, LandmarkError> {
        let points: [LandmarkPoint; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkError::WrongPointCount(points.len()))?;
        Ok(Self { points })
    }

    /// Point at one of the fixed skeleton indices
    pub fn point(&self, index: usize) -> LandmarkPoint {
        self.points[index]
    }

    /// The wrist, used as the hand's reference point for motion tracking
    pub fn wrist(&self) -> LandmarkPoint {
        self.points[WRIST]
    }
}
