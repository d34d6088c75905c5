use std::time::{Duration, Instant};

use crate::game::GameStatus;

/// Session statistics: clock of the current game plus totals since launch
#[derive(Debug, Clone)]
pub struct GameMetrics {
    started: Instant,
    /// Set when the current game ends, freezing the clock
    final_time: Option<Duration>,
    pub high_score: u32,
    pub games_played: u32,
    pub games_won: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            final_time: None,
            high_score: 0,
            games_played: 0,
            games_won: 0,
        }
    }

    /// Time spent in the current game
    pub fn elapsed(&self) -> Duration {
        self.final_time.unwrap_or_else(|| self.started.elapsed())
    }

    pub fn on_game_start(&mut self) {
        self.started = Instant::now();
        self.final_time = None;
    }

    /// Record a finished game
    pub fn on_game_end(&mut self, final_score: u32, status: GameStatus) {
        self.final_time = Some(self.started.elapsed());
        self.games_played += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
        }
        self.high_score = self.high_score.max(final_score);
    }

    /// `MM:SS`, minutes not capped at 59
    pub fn clock_label(&self) -> String {
        format_clock(self.elapsed())
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn format_clock(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_format() {
        let cases = [(0, "00:00"), (59, "00:59"), (125, "02:05"), (3661, "61:01")];
        for (secs, expected) in cases {
            assert_eq!(format_clock(Duration::from_secs(secs)), expected);
        }
    }

    #[test]
    fn test_totals_across_games() {
        let mut metrics = GameMetrics::new();

        for (score, status) in [
            (10, GameStatus::GameOver),
            (5, GameStatus::GameOver),
            (15, GameStatus::Won),
        ] {
            metrics.on_game_start();
            metrics.on_game_end(score, status);
        }

        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 3);
        assert_eq!(metrics.games_won, 1);
    }

    #[test]
    fn test_clock_stops_at_game_end_and_restarts() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_end(0, GameStatus::GameOver);
        let frozen = metrics.elapsed();

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(metrics.elapsed(), frozen);

        metrics.on_game_start();
        assert!(metrics.elapsed() < Duration::from_millis(20));
    }
}
