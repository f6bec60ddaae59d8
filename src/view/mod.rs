//! TUI rendering and terminal management (impure shell)

pub mod status_line;
pub mod text_pane;

pub use status_line::{status_text, StatusLine};
pub use text_pane::{gutter_cell, TextPane};

use crate::config::keybindings::KeyBindings;
use crate::model::TextBuffer;
use crate::state::{EditorSession, SearchInput, SessionOptions};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Position},
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Viewport size for a terminal of `columns` x `rows` cells.
///
/// The last column stays free and two rows are reserved below the text: a
/// spacer and the status line.
pub fn viewport_size(columns: u16, rows: u16) -> (usize, usize) {
    (
        usize::from(columns).saturating_sub(1),
        usize::from(rows).saturating_sub(2),
    )
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    session: EditorSession,
    key_bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(buffer: TextBuffer, options: SessionOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Self::with_terminal(terminal, buffer, options, KeyBindings::default())
    }

    /// Run the main event loop
    ///
    /// Redraws after every event and returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            self.draw()?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        info!("quit");
                        return Ok(());
                    }
                }
                Event::Resize(columns, rows) => self.handle_resize(columns, rows),
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Wrap an existing terminal, sizing the viewport from it.
    pub fn with_terminal(
        terminal: Terminal<B>,
        buffer: TextBuffer,
        options: SessionOptions,
        key_bindings: KeyBindings,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let (width, height) = viewport_size(size.width, size.height);
        let session = EditorSession::new(buffer, width, height, options);
        Ok(Self {
            terminal,
            session,
            key_bindings,
        })
    }

    /// Session state behind the screen.
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Underlying terminal, for reading a test backend's buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Underlying terminal, mutably, so the test harness can resize its backend.
    #[cfg(test)]
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C quits even from inside the search prompt
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.session.is_searching() {
            let input = match key.code {
                KeyCode::Enter => Some(SearchInput::Commit),
                KeyCode::Esc => Some(SearchInput::Cancel),
                KeyCode::Backspace => Some(SearchInput::Backspace),
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(SearchInput::Char(ch))
                }
                _ => None,
            };
            if let Some(input) = input {
                self.session.search_input(input);
            }
            return false;
        }

        match self.key_bindings.get(key) {
            Some(action) => self.session.apply(action),
            None => false,
        }
    }

    /// Resize the viewport to a new terminal size.
    pub fn handle_resize(&mut self, columns: u16, rows: u16) {
        let (width, height) = viewport_size(columns, rows);
        self.session.resize(width, height);
    }

    /// Render one frame: text rows, spacer, status line, cursor.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let view = self.session.render();
        let status = status_text(&self.session, &view);
        let gutter = self.session.gutter_columns();
        let text_height = u16::try_from(self.session.viewport().height()).unwrap_or(u16::MAX);
        let text_width = u16::try_from(self.session.viewport().width()).unwrap_or(u16::MAX);

        self.terminal.draw(|frame| {
            let [text_area, _, status_area] = Layout::vertical([
                Constraint::Length(text_height),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            let mut text_area = text_area;
            text_area.width = text_area.width.min(text_width);
            frame.render_widget(TextPane::new(&view.rows, gutter), text_area);
            frame.render_widget(StatusLine::new(&status), status_area);

            if let Some((col, row)) = view.point {
                let area = frame.area();
                let x = u16::try_from(col + gutter).unwrap_or(u16::MAX);
                let y = u16::try_from(row).unwrap_or(u16::MAX);
                if x < area.width && y < area.height {
                    frame.set_cursor_position(Position::new(x, y));
                }
            }
        })?;
        Ok(())
    }
}

/// Initialize and run the TUI application on a loaded buffer
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(buffer: TextBuffer, options: SessionOptions) -> Result<(), TuiError> {
    debug!(chars = buffer.len(), ?options, "starting TUI");
    let result = TuiApp::new(buffer, options).and_then(|mut app| app.run());

    // Always restore terminal state, also after a failed setup
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
