use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};
use tracing::{debug, error, info};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Redraw cadence, independent of the game speed
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut engine = GameEngine::new(config)?;
        let state = engine.reset();

        Ok(Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    /// Take over the terminal and play until the user quits
    pub async fn run(&mut self) -> Result<()> {
        let mut session = TerminalSession::open()?;
        let result = self.run_game_loop(&mut session.terminal).await;
        drop(session);

        info!(
            games_played = self.metrics.games_played,
            games_won = self.metrics.games_won,
            high_score = self.metrics.high_score,
            "session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = Self::tick_timer(self.engine.config().tick_interval());
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                tick_timer.reset();
                            }
                        }
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Periodic tick whose first firing is one full period away
    fn tick_timer(period: Duration) -> Interval {
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        timer
    }

    /// Returns true when a new game was started and the tick timer must restart
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input_handler.handle_key_event(key);
                self.handle_action(action)
            }
            _ => false,
        }
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Turn(direction) => {
                if !self.state.set_direction(direction) {
                    debug!(?direction, "reversal ignored");
                }
                false
            }
            KeyAction::Restart if self.state.is_terminal() => {
                self.reset_game();
                true
            }
            KeyAction::Restart | KeyAction::None => false,
            KeyAction::Quit => {
                self.should_quit = true;
                false
            }
        }
    }

    fn update_game(&mut self) {
        if self.state.is_terminal() {
            return;
        }

        let outcome = self.engine.tick(&mut self.state);

        if outcome.ended_game() {
            self.metrics.on_game_end(self.state.score, outcome.status);
        }
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
    }
}

/// Raw-mode alternate screen on stderr, restored when dropped
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stderr>>,
}

impl TerminalSession {
    fn open() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        let mut terminal =
            Terminal::new(CrosstermBackend::new(stderr)).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            error!(?err, "failed to leave alternate screen");
        }
        if let Err(err) = self.terminal.show_cursor() {
            error!(?err, "failed to show cursor");
        }
    }
}
