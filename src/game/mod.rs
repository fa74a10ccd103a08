//! Core Snake game logic, free of any I/O or rendering dependencies.
//!
//! The game is a plain consumer of direction input: it does not care whether
//! a direction came from the keyboard or the gesture classifier.

pub mod action;
pub mod board;
pub mod config;
pub mod engine;

pub use action::{Action, Direction};
pub use board::{CollisionType, GameState, Position, Snake};
pub use config::GameConfig;
pub use engine::{GameEngine, StepOutcome};
