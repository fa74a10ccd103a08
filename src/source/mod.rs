//! Landmark sources: where hand frames come from.
//!
//! A real deployment would back this trait with a camera plus a hand-landmark
//! model; that pipeline is out of scope here. The shipped implementation
//! replays recorded frames from a JSONL file, which exercises the classifier
//! end to end and keeps demos deterministic.

pub mod replay;

pub use replay::ReplaySource;

use anyhow::Result;
use std::time::Duration;

use crate::gesture::HandFrame;

/// One per-frame observation: a timestamp plus the detected hand, if any.
/// "No hand" is a normal observation, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedFrame {
    /// Time of the observation, relative to the start of the stream
    pub at: Duration,
    pub hand: Option<HandFrame>,
}

/// Per-frame supplier of hand landmark observations
pub trait LandmarkSource {
    /// Next observation, or `Ok(None)` once the source is exhausted
    fn next_frame(&mut self) -> Result<Option<TimedFrame>>;
}
