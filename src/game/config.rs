use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest grid side accepted; keeps the grid drawable in a terminal
pub const MAX_GRID_SIDE: usize = 255;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Milliseconds between two ticks
    pub tick_interval_ms: u64,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            tick_interval_ms: 120,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Same configuration with a fixed food seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Total number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }

    /// Reject grids the engine cannot start a game on
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.grid_width <= MAX_GRID_SIDE && self.grid_height <= MAX_GRID_SIDE,
            "grid {}x{} is too large, sides are limited to {}",
            self.grid_width,
            self.grid_height,
            MAX_GRID_SIDE
        );
        ensure!(
            self.initial_snake_length > 0,
            "initial snake length must be at least 1"
        );
        ensure!(
            self.initial_snake_length <= self.grid_width,
            "initial snake length {} does not fit in a row of {} cells",
            self.initial_snake_length,
            self.grid_width
        );
        ensure!(
            self.initial_snake_length < self.cell_count(),
            "a snake of {} leaves no room for food on a {}x{} grid",
            self.initial_snake_length,
            self.grid_width,
            self.grid_height
        );
        ensure!(self.tick_interval_ms > 0, "tick interval must be positive");
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// The result is not validated so callers can apply overrides first.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }
}
