//! Gesture Snake - a terminal Snake game steered by hand gestures
//!
//! This library provides:
//! - Gesture-to-direction classification (gesture module) - the core
//! - Hand landmark sources (source module) - replay file today, camera later
//! - Core game logic (game module)
//! - Keyboard fallback input (input module)
//! - TUI rendering (render module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod gesture;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod source;
