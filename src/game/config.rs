use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the game board and pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Time per simulation step
    pub tick: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            tick: Duration::from_millis(125),
        }
    }
}

impl GameConfig {
    /// Configuration with a custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Override the simulation tick
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Small grid, handy in tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}
