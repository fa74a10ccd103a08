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
use tokio::time::interval;

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState};
use crate::gesture::GestureClassifier;
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{ControlStatus, Renderer};
use crate::source::LandmarkSource;

/// Interactive play: keyboard plus an optional gesture source.
///
/// Each game tick pulls one observation from the landmark source (when one is
/// attached) and runs it through the classifier; an emitted direction is
/// buffered exactly like a key press and applied on the next step. The
/// classifier state lives on this task only.
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    classifier: GestureClassifier,
    gesture_source: Option<Box<dyn LandmarkSource>>,
    tick: Duration,
    pending_direction: Option<Direction>,
    last_gesture: Option<Direction>,
    paused: bool,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(
        config: GameConfig,
        classifier: GestureClassifier,
        gesture_source: Option<Box<dyn LandmarkSource>>,
    ) -> Self {
        let tick = config.tick;
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            classifier,
            gesture_source,
            tick,
            pending_direction: None,
            last_gesture: None,
            paused: false,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick);

        // Render at 30 FPS independent of the game tick
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    if self.state.is_alive && !self.paused {
                        self.poll_gesture()?;
                        self.update_game();
                    }
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    let status = self.control_status();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics, &status);
                    }).context("Failed to draw frame")?;
                }

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

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Key press only, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.pending_direction = Some(direction);
                }
                KeyAction::TogglePause => {
                    if self.state.is_alive {
                        self.paused = !self.paused;
                    }
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::Ignored => {}
            }
        }
    }

    /// Pull one observation from the landmark source and classify it.
    /// An exhausted source detaches; keyboard control keeps working.
    fn poll_gesture(&mut self) -> Result<()> {
        let Some(source) = self.gesture_source.as_mut() else {
            return Ok(());
        };

        match source.next_frame().context("Landmark source failed")? {
            Some(observation) => {
                if let Some(direction) = self
                    .classifier
                    .classify(observation.hand.as_ref(), observation.at)
                {
                    self.pending_direction = Some(direction);
                    self.last_gesture = Some(direction);
                }
            }
            None => {
                self.gesture_source = None;
            }
        }

        Ok(())
    }

    fn update_game(&mut self) {
        let action = self
            .pending_direction
            .take()
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        let outcome = self.engine.step(&mut self.state, action);

        if outcome.terminated() {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.pending_direction = None;
        self.last_gesture = None;
        self.paused = false;
    }

    fn control_status(&self) -> ControlStatus {
        ControlStatus {
            gestures_active: self.gesture_source.is_some(),
            last_gesture: self.last_gesture,
            paused: self.paused,
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
