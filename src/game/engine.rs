use super::{
    action::{Action, Direction},
    board::{CollisionType, GameState, Position, Snake},
    config::GameConfig,
};
use rand::Rng;

/// What happened during one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Collision that ended the run, if any
    pub collision: Option<CollisionType>,
}

impl StepOutcome {
    pub fn terminated(&self) -> bool {
        self.collision.is_some()
    }
}

/// Board rules: movement, collisions, food
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Fresh board: snake at grid center heading right, food at a free cell
    pub fn reset(&mut self) -> GameState {
        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(center, Direction::Right, self.config.initial_snake_length);
        let food = self.spawn_food(&snake);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Advance the board one tick, steering first if the action asks for it.
    /// A turn directly into the snake's own neck is ignored.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepOutcome {
        if !state.is_alive {
            return StepOutcome {
                ate_food: false,
                collision: None,
            };
        }

        if let Action::Move(new_direction) = action {
            if !state.snake.direction.is_opposite(new_direction) {
                state.snake.direction = new_direction;
            }
        }

        let new_head = state.snake.head().moved_in_direction(state.snake.direction);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.is_alive = false;
            state.steps += 1;
            return StepOutcome {
                ate_food: false,
                collision: Some(collision),
            };
        }

        let ate_food = new_head == state.food;
        state.snake.advance(ate_food);

        if ate_food {
            state.score += 1;
            state.food = self.spawn_food(&state.snake);
        }
        state.steps += 1;

        StepOutcome {
            ate_food,
            collision: None,
        }
    }

    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }
        if state.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }
        None
    }

    /// Random empty cell not covered by the snake
    fn spawn_food(&mut self, snake: &Snake) -> Position {
        loop {
            let pos = Position::new(
                self.rng.gen_range(0..self.config.grid_width) as i32,
                self.rng.gen_range(0..self.config.grid_height) as i32,
            );
            if !snake.body.contains(&pos) {
                return pos;
            }
        }
    }
}
