use std::collections::VecDeque;

use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Reduce the position onto a `width` x `height` torus
    pub fn wrapped(&self, width: usize, height: usize) -> Self {
        Self {
            x: self.x.rem_euclid(width as i32),
            y: self.y.rem_euclid(height as i32),
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    pub body: VecDeque<Position>,
    /// Direction applied on the last tick
    pub direction: Direction,
}

impl Snake {
    /// Create a snake whose body trails behind `head`, wrapping at the grid edges
    pub fn new(
        head: Position,
        direction: Direction,
        length: usize,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        let back = direction.opposite();
        let mut body = VecDeque::with_capacity(length);
        let mut segment = head.wrapped(grid_width, grid_height);

        for _ in 0..length {
            body.push_back(segment);
            segment = segment
                .moved_in_direction(back)
                .wrapped(grid_width, grid_height);
        }

        Self { body, direction }
    }

    /// Build a snake from explicit segments, head first
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments(segments: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        let body: VecDeque<Position> = segments.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Check if position is covered by any segment, head and tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Put a new head in front, dropping the tail unless the snake grows
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);

        if !grow {
            self.body.pop_back();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// The snake ran into itself
    GameOver,
    /// Every cell is covered by the snake
    Won,
}

impl GameStatus {
    /// Both game over and win stop the game until a restart
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction recorded by input, applied on the next tick
    pub pending_direction: Direction,
    pub food: Option<Position>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Create a new running game state
    pub fn new(
        snake: Snake,
        food: Option<Position>,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            pending_direction: snake.direction,
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            status: GameStatus::Running,
        }
    }

    /// Record a turn for the next tick.
    ///
    /// A turn straight back onto the neck is refused, measured against the
    /// direction the snake actually moved last, not the pending one. A
    /// one-cell snake has no neck and may turn anywhere.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.snake.len() > 1 && self.snake.direction.is_opposite(direction) {
            return false;
        }

        self.pending_direction = direction;
        true
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    pub fn wrap(&self, pos: Position) -> Position {
        pos.wrapped(self.grid_width, self.grid_height)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Line shown under the grid
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::Running => "Use arrow keys. Press Space to restart.".to_string(),
            GameStatus::GameOver => format!(
                "Game over! Score: {}. Press Space to restart.",
                self.score
            ),
            GameStatus::Won => "You win! Press Space to play again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(snake: Snake) -> GameState {
        GameState::new(snake, Some(Position::new(0, 0)), 10, 10)
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_position_wrapping() {
        assert_eq!(Position::new(-1, 0).wrapped(10, 8), Position::new(9, 0));
        assert_eq!(Position::new(10, 8).wrapped(10, 8), Position::new(0, 0));
        assert_eq!(Position::new(3, -1).wrapped(10, 8), Position::new(3, 7));
        assert_eq!(Position::new(4, 4).wrapped(10, 8), Position::new(4, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 10, 10);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.tail(), Position::new(3, 5));
    }

    #[test]
    fn test_snake_creation_wraps_body() {
        let snake = Snake::new(Position::new(0, 2), Direction::Right, 3, 5, 5);
        let body: Vec<_> = snake.body.iter().copied().collect();
        assert_eq!(
            body,
            vec![Position::new(0, 2), Position::new(4, 2), Position::new(3, 2)]
        );
    }

    #[test]
    fn test_from_segments_keeps_order() {
        let snake = Snake::from_segments([Position::new(2, 1), Position::new(1, 1)], Direction::Right);
        assert_eq!(snake.head(), Position::new(2, 1));
        assert_eq!(snake.tail(), Position::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn test_from_segments_rejects_empty_body() {
        Snake::from_segments(Vec::new(), Direction::Up);
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 10, 10);

        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.tail(), Position::new(4, 5));

        snake.advance(Position::new(7, 5), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(7, 5));
        assert_eq!(snake.tail(), Position::new(4, 5));
    }

    #[test]
    fn test_occupancy_includes_head_and_tail() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 10, 10);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(6, 5)));
    }

    #[test]
    fn test_set_direction_rejects_reversal() {
        let mut state = state_with(Snake::new(Position::new(5, 5), Direction::Right, 3, 10, 10));

        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.pending_direction, Direction::Right);

        assert!(state.set_direction(Direction::Up));
        assert_eq!(state.pending_direction, Direction::Up);
    }

    #[test]
    fn test_set_direction_checks_current_not_pending() {
        let mut state = state_with(Snake::new(Position::new(5, 5), Direction::Right, 3, 10, 10));

        // Up is pending but the snake still faces right, so Down is a legal turn
        assert!(state.set_direction(Direction::Up));
        assert!(state.set_direction(Direction::Down));
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.pending_direction, Direction::Down);
    }

    #[test]
    fn test_single_cell_snake_may_reverse() {
        let mut state = state_with(Snake::new(Position::new(5, 5), Direction::Right, 1, 10, 10));
        assert!(state.set_direction(Direction::Left));
        assert_eq!(state.pending_direction, Direction::Left);
    }

    #[test]
    fn test_bounds_checking() {
        let state = state_with(Snake::new(Position::new(5, 5), Direction::Right, 3, 10, 10));

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(9, 9)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(10, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 10)));
    }

    #[test]
    fn test_status_messages() {
        let mut state = state_with(Snake::new(Position::new(5, 5), Direction::Right, 3, 10, 10));
        assert_eq!(
            state.status_message(),
            "Use arrow keys. Press Space to restart."
        );

        state.score = 4;
        state.status = GameStatus::GameOver;
        assert!(state.is_terminal());
        assert_eq!(
            state.status_message(),
            "Game over! Score: 4. Press Space to restart."
        );

        state.status = GameStatus::Won;
        assert!(state.is_terminal());
        assert_eq!(state.status_message(), "You win! Press Space to play again.");
    }
}
