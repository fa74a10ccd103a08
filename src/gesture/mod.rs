//! Gesture-to-direction classification.
//!
//! Consumes per-frame hand landmark data and produces a discrete, debounced
//! direction signal. Two strategies cooperate: swipe detection (motion of the
//! wrist over a short window) runs first, static pose classification
//! (pointing, thumbs, fist, peace) is the fallback. One shared cooldown
//! debounces acceptances from either strategy.

pub mod classifier;
pub mod config;
pub mod landmarks;
pub mod pose;
pub mod swipe;

pub use classifier::GestureClassifier;
pub use config::GestureConfig;
pub use landmarks::{HandFrame, LANDMARK_COUNT, LandmarkError, LandmarkPoint};
