//! Main TUI application state and logic

use crate::engine::Engine;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Moves,
    Yard,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Moves => FocusedPane::Yard,
            FocusedPane::Yard => FocusedPane::Moves,
        }
    }
}

/// The main application state
pub struct App {
    /// The engine holding the completed run and its snapshot history
    pub engine: Engine,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub moves_scroll: usize,
    pub yard_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over an engine whose run has completed.
    pub fn new(engine: Engine) -> Self {
        App {
            engine,
            focused_pane: FocusedPane::Moves,
            moves_scroll: 0,
            yard_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= Duration::from_millis(400) {
                    if self.engine.step_forward().is_ok() {
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Moves pane on the left, yard on the right, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(pane_area);

        // The move that produced the displayed state, None at snapshot 0.
        let position = self.engine.history_position();
        let current_move_index = position.checked_sub(1);

        super::panes::render_moves_pane(
            frame,
            columns[0],
            self.engine.moves(),
            current_move_index,
            self.focused_pane == FocusedPane::Moves,
            &mut self.moves_scroll,
        );

        super::panes::render_yard_pane(
            frame,
            columns[1],
            self.engine.grid(),
            self.engine.current_move(),
            self.focused_pane == FocusedPane::Yard,
            &mut self.yard_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            position,
            self.engine.total_snapshots(),
            self.engine.crane_name(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.engine.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} move(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Moves => {
                    self.moves_scroll = self.moves_scroll.saturating_sub(1);
                }
                FocusedPane::Yard => {
                    self.yard_scroll = self.yard_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Moves => {
                    self.moves_scroll = self.moves_scroll.saturating_add(1);
                }
                FocusedPane::Yard => {
                    self.yard_scroll = self.yard_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_millis(400))
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.engine.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.engine.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Step forward one move
    fn step_forward(&mut self) {
        match self.engine.step_forward() {
            Ok(()) => match self.engine.current_move() {
                Some(mv) => self.status_message = format!("Applied: {}", mv),
                None => self.status_message = "Stepped forward".to_string(),
            },
            Err(e) => {
                self.status_message = format!("{}", e);
            }
        }
    }

    /// Step backward one move
    fn step_backward(&mut self) {
        match self.engine.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
            }
            Err(e) => {
                self.status_message = format!("{}", e);
            }
        }
    }
}
