//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The grid is a torus: a snake leaving one edge comes back on the opposite one.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{GameState, GameStatus, Position, Snake};
