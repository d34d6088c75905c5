use super::{
    config::GameConfig,
    direction::Direction,
    state::{GameState, GameStatus, Position, Snake},
};
use anyhow::Result;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, info};

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Status after the tick
    pub status: GameStatus,
}

impl TickOutcome {
    /// True when this tick moved the game out of `Running`
    pub fn ended_game(&self) -> bool {
        self.status.is_terminal()
    }
}

/// The game engine that handles all game logic
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create an engine, seeding food placement from the config when a seed is set
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game: snake centred and heading right, score cleared, food placed
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Right,
            self.config.initial_snake_length,
            self.config.grid_width,
            self.config.grid_height,
        );

        let food = self.spawn_food(&snake);
        info!(
            width = self.config.grid_width,
            height = self.config.grid_height,
            ?food,
            "new game"
        );

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Advance the game by one tick
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.is_terminal() {
            return TickOutcome {
                ate_food: false,
                status: state.status,
            };
        }

        state.snake.direction = state.pending_direction;
        let next = state.wrap(state.snake.head().moved_in_direction(state.snake.direction));
        state.steps += 1;

        // The tail still sits where it is when the head arrives, so it counts.
        if state.is_occupied_by_snake(next) {
            state.status = GameStatus::GameOver;
            info!(score = state.score, steps = state.steps, "game over");
            return TickOutcome {
                ate_food: false,
                status: state.status,
            };
        }

        let ate_food = state.food == Some(next);
        state.snake.advance(next, ate_food);

        if ate_food {
            state.score += 1;
            state.food = self.spawn_food(&state.snake);
            debug!(score = state.score, food = ?state.food, "food eaten");
        }

        if state.food.is_none() {
            state.status = GameStatus::Won;
            info!(score = state.score, steps = state.steps, "grid filled");
        }

        TickOutcome {
            ate_food,
            status: state.status,
        }
    }

    /// Pick a uniformly random empty cell, or `None` when the snake covers the grid
    fn spawn_food(&mut self, snake: &Snake) -> Option<Position> {
        let empty: Vec<Position> = (0..self.config.grid_height as i32)
            .flat_map(|y| (0..self.config.grid_width as i32).map(move |x| Position::new(x, y)))
            .filter(|pos| !snake.occupies(*pos))
            .collect();

        empty.choose(&mut self.rng).copied()
    }
}
