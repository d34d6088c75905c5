//! In-process statistics shown alongside the grid. Nothing here outlives the process.

pub mod game_metrics;

pub use game_metrics::GameMetrics;
