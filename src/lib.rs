//! Torus Snake - the classic Snake game on a wrap-around grid, played in the terminal
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
