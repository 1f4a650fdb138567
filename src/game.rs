use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GridSize, POINTS_PER_FOOD};
use crate::food::sample_food;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    NotStarted,
    Running,
    GameOver,
}

/// Complete mutable game state for one play session.
///
/// The high score is the only value that outlives `start()`; everything
/// else is reset when a new game begins.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh engine with entropy-seeded food placement.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::new_with_seed(bounds, rand::thread_rng().r#gen())
    }

    /// Creates a deterministic engine for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(start_position(bounds), Direction::Up);
        let food = sample_food(&mut rng, bounds);

        Self {
            snake,
            food,
            score: 0,
            high_score: 0,
            status: GameStatus::NotStarted,
            bounds,
            rng,
        }
    }

    /// Starts a new game: one-cell snake at the board center heading up,
    /// score zero, fresh food. The high score carries over.
    pub fn start(&mut self) {
        self.snake = Snake::new(start_position(self.bounds), Direction::Up);
        self.food = sample_food(&mut self.rng, self.bounds);
        self.score = 0;
        self.status = GameStatus::Running;
    }

    /// Advances the simulation by one tick. A no-op unless running.
    ///
    /// Collisions are checked against the prospective head before the snake
    /// moves, so a losing tick leaves the body exactly as it was.
    pub fn advance(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        let next = self.snake.next_head();
        if !next.is_within_bounds(self.bounds) {
            self.status = GameStatus::GameOver;
            return;
        }
        if self.snake.occupies(next) {
            self.status = GameStatus::GameOver;
            return;
        }

        let ate = next == self.food;
        self.snake.step(ate);

        if ate {
            self.score += POINTS_PER_FOOD;
            if self.score > self.high_score {
                self.high_score = self.score;
            }
            self.food = sample_food(&mut self.rng, self.bounds);
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Running {
                    self.snake.set_direction(direction);
                }
            }
            GameInput::Confirm => {
                if matches!(self.status, GameStatus::NotStarted | GameStatus::GameOver) {
                    self.start();
                }
            }
            GameInput::Quit => {}
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

fn start_position(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}
