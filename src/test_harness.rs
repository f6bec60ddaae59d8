//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::model::TextBuffer;
use crate::source::read_file;
use crate::state::{EditorSession, SessionOptions};
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to one string line per screen row.
///
/// Trailing blanks of each row are removed; trailing empty rows are dropped.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load a fixture file into a test app of `width` x `height` cells.
    ///
    /// # Returns
    /// * `Ok(Self)` - Initialized harness with fixture loaded
    /// * `Err(TuiError)` - If the fixture cannot be read
    pub fn from_fixture_with_size(path: &str, width: u16, height: u16) -> Result<Self, TuiError> {
        let buffer = read_file(path).map_err(std::io::Error::other)?;
        Self::from_buffer(buffer, width, height)
    }

    /// View `text` in a test app of `width` x `height` cells.
    pub fn from_text_with_size(text: &str, width: u16, height: u16) -> Result<Self, TuiError> {
        Self::from_buffer(TextBuffer::new(text), width, height)
    }

    fn from_buffer(buffer: TextBuffer, width: u16, height: u16) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app = TuiApp::with_terminal(
            terminal,
            buffer,
            SessionOptions::default(),
            KeyBindings::default(),
        )?;
        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events)
    ///
    /// Used both for command keys and for search input.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Simulate the terminal changing size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_resize(width, height);
    }

    /// Access the session for assertions
    pub fn session(&self) -> &EditorSession {
        self.app.session()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame and return the screen as text
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Rendered text rows only, without the spacer and status line.
    pub fn text_rows(&mut self) -> Vec<String> {
        let height = self.session().viewport().height();
        let screen = self.render_to_string();
        let mut rows: Vec<String> = screen.lines().take(height).map(str::to_string).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        rows
    }

    /// Bottom line of the screen: status report or search prompt.
    pub fn status(&mut self) -> String {
        self.render_to_string();
        let buffer = self.app.terminal().backend().buffer();
        let area = buffer.area();
        let y = area.bottom().saturating_sub(1);
        (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}
