//! Editor session: all mutable state of one viewing session.
//!
//! The session owns the buffer and everything that moves over it. The shell
//! feeds it one event at a time ([`EditorSession::apply`] for commands,
//! [`EditorSession::search_input`] while a prompt is open) and draws whatever
//! [`EditorSession::render`] returns. Every event ends with the view
//! reconciled so that the cursor is visible on the next render.

use crate::layout::{DisplayRow, LayoutParams, RenderIter, RowIndex, TabWidth, WrapWidth};
use crate::model::{KeyAction, TextBuffer};
use crate::state::reconcile::{reconcile, view_end};
use crate::state::search_input_handler::{
    activate_search_input, cancel_search, handle_backspace, handle_char_input, submit_search,
    Interaction, InteractionOutcome, SearchInput,
};
use crate::state::{scroll_down, scroll_up, Cursor, SearchState, Viewport};
use tracing::{debug, trace};

// ===== Options =====

/// Display options that stay fixed unless the user toggles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Tab stop spacing.
    pub tab: TabWidth,
    /// Whether the continuation gutter is drawn.
    pub show_gutter: bool,
    /// Columns reserved for the gutter when it is shown.
    pub gutter_width: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            tab: TabWidth::DEFAULT,
            show_gutter: true,
            gutter_width: 3,
        }
    }
}

// ===== RenderedView =====

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    /// At most `viewport.height()` rows, top to bottom.
    pub rows: Vec<DisplayRow>,
    /// Cursor as `(text column, row)`, gutter excluded.
    pub point: Option<(usize, usize)>,
    /// Offset just past the last rendered row.
    pub view_end: usize,
}

// ===== EditorSession =====

/// All state of one viewing session: buffer, cursor, viewport and search.
///
/// Every key goes through [`EditorSession::apply`] or
/// [`EditorSession::search_input`], which leave the cursor visible.
#[derive(Debug, Clone)]
pub struct EditorSession {
    buffer: TextBuffer,
    cursor: Cursor,
    viewport: Viewport,
    options: SessionOptions,
    search: SearchState,
    interaction: Interaction,
    index: RowIndex,
    view_end: usize,
}

impl EditorSession {
    /// Start a session at the top of `buffer`.
    ///
    /// `width` counts the gutter columns; `height` counts text rows.
    pub fn new(buffer: TextBuffer, width: usize, height: usize, options: SessionOptions) -> Self {
        let viewport = Viewport::new(width, height);
        let layout = layout_for(&viewport, &options);
        let index = RowIndex::build(&buffer, layout);
        let view_end = view_end(&buffer, &index, &viewport);
        debug!(len = buffer.len(), width, height, "session started");
        Self {
            buffer,
            cursor: Cursor::default(),
            viewport,
            options,
            search: SearchState::default(),
            interaction: Interaction::Idle,
            index,
            view_end,
        }
    }

    // ===== Accessors =====

    /// The text being viewed.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Last search and the position the open prompt started from.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Whether the search prompt is open.
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Whether the continuation gutter is drawn.
    pub fn show_gutter(&self) -> bool {
        self.options.show_gutter
    }

    /// Columns taken by the gutter right now (0 when hidden).
    pub fn gutter_columns(&self) -> usize {
        gutter_columns(&self.options)
    }

    /// Current layout: wrap width is the viewport width minus the gutter.
    pub fn layout(&self) -> LayoutParams {
        layout_for(&self.viewport, &self.options)
    }

    /// End offset of the view as of the last reconcile.
    pub fn view_end(&self) -> usize {
        self.view_end
    }

    /// Whether keys currently go to the search prompt.
    pub fn is_searching(&self) -> bool {
        matches!(self.interaction, Interaction::AwaitingInput { .. })
    }

    /// Prompt label and query text while searching.
    pub fn prompt(&self) -> Option<(&'static str, &str)> {
        match &self.interaction {
            Interaction::AwaitingInput { direction, query } => {
                Some((direction.prompt(), query.as_str()))
            }
            Interaction::Idle => None,
        }
    }

    // ===== Rendering =====

    /// Lay out the visible rows and locate the cursor among them.
    pub fn render(&self) -> RenderedView {
        let first = self.viewport.first_offset();
        let mut scan = RenderIter::new(&self.buffer, self.layout(), self.cursor.offset(), first);
        let rows: Vec<DisplayRow> = scan.by_ref().take(self.viewport.height()).collect();
        let result = scan.result();
        RenderedView {
            rows,
            point: result.point(),
            view_end: first + result.total_bytes_rendered,
        }
    }

    /// Status line text for `view`, truncated to the viewport width.
    ///
    /// Format: `point.pos:{offset}, {screen col}, {row} ; view: {first}-{end}`.
    /// The screen column includes the gutter. `view` must come from
    /// [`EditorSession::render`] on the current state.
    pub fn status_line(&self, view: &RenderedView) -> String {
        let (col, row) = match view.point {
            Some((col, row)) => ((col + self.gutter_columns()).to_string(), row.to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        let status = format!(
            "point.pos:{}, {}, {} ; view: {}-{}",
            self.cursor.offset(),
            col,
            row,
            self.viewport.first_offset(),
            view.view_end
        );
        status.chars().take(self.viewport.width()).collect()
    }

    // ===== Events =====

    /// Run a navigation command. Returns true when the session should end.
    ///
    /// Keys typed while a search prompt is open belong to
    /// [`EditorSession::search_input`]; starting another search then is
    /// ignored.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        trace!(?action, scroll = action.is_scroll(), "apply");
        let wrap = self.layout().wrap;
        let half_page = self.viewport.height() / 2;
        match action {
            KeyAction::Quit => {
                debug!("quit requested");
                return true;
            }
            KeyAction::MoveRight => self.cursor = self.cursor.move_right(&self.buffer),
            KeyAction::MoveLeft => self.cursor = self.cursor.move_left(),
            KeyAction::MoveDown => self.cursor = self.cursor.move_down(&self.buffer, wrap),
            KeyAction::MoveUp => self.cursor = self.cursor.move_up(&self.buffer, wrap),
            KeyAction::LineEnd => self.cursor = self.cursor.move_line_end(&self.buffer),
            KeyAction::LineStart => self.cursor = self.cursor.move_line_start(&self.buffer),
            KeyAction::GotoStart => {
                self.cursor = Cursor::goto(&self.buffer, 0);
                self.viewport.set_first_offset(0);
            }
            KeyAction::GotoEnd => self.cursor = Cursor::goto(&self.buffer, self.buffer.len()),
            KeyAction::ScrollDown => self.scroll_down(wrap, 1),
            KeyAction::ScrollUp => self.scroll_up(wrap, 1),
            KeyAction::PageDown => self.scroll_down(wrap, half_page),
            KeyAction::PageUp => self.scroll_up(wrap, half_page),
            KeyAction::StartSearch(direction) => {
                if !self.is_searching() {
                    self.search.begin(self.cursor, &self.viewport);
                    let idle = std::mem::take(&mut self.interaction);
                    self.interaction = activate_search_input(idle, direction);
                }
            }
            KeyAction::RepeatSearch(direction) => {
                if !self.search.repeat(&self.buffer, direction, &mut self.cursor) {
                    debug!(?direction, "repeat search found nothing");
                }
            }
            KeyAction::ToggleGutter => self.toggle_gutter(),
        }
        self.reconcile();
        false
    }

    /// Feed one keystroke to the open search prompt.
    ///
    /// Every edit of the query re-runs the search from where the prompt was
    /// opened. No-op when no prompt is open.
    pub fn search_input(&mut self, input: SearchInput) {
        let interaction = std::mem::take(&mut self.interaction);
        match input {
            SearchInput::Char(ch) => {
                self.interaction = handle_char_input(interaction, ch);
                self.update_search();
            }
            SearchInput::Backspace => {
                self.interaction = handle_backspace(interaction);
                self.update_search();
            }
            SearchInput::Commit => {
                let (next, outcome) = submit_search(interaction);
                self.interaction = next;
                if let Some(InteractionOutcome::Committed { query, .. }) = outcome {
                    self.search.commit(self.cursor, &query);
                }
            }
            SearchInput::Cancel => {
                let (next, outcome) = cancel_search(interaction);
                self.interaction = next;
                if outcome.is_some() {
                    self.search.cancel(&mut self.cursor, &mut self.viewport);
                }
            }
        }
        self.reconcile();
    }

    /// Adjust the view so the cursor is visible and refresh `view_end`.
    pub fn reconcile(&mut self) {
        reconcile(&self.buffer, &self.index, &mut self.viewport, self.cursor);
        self.view_end = view_end(&self.buffer, &self.index, &self.viewport);
    }

    /// Change the viewport dimensions, relaying out rows if the wrap width changed.
    pub fn resize(&mut self, width: usize, height: usize) {
        debug!(width, height, "resize");
        self.viewport.resize(width, height);
        self.refresh_index();
        self.reconcile();
    }

    /// Show or hide the gutter. The wrap width grows or shrinks with it.
    pub fn toggle_gutter(&mut self) {
        self.options.show_gutter = !self.options.show_gutter;
        debug!(show_gutter = self.options.show_gutter, "gutter toggled");
        self.refresh_index();
    }

    // ===== Internals =====

    fn scroll_down(&mut self, wrap: WrapWidth, lines: usize) {
        scroll_down(&self.buffer, wrap, &mut self.viewport, &mut self.cursor, lines);
    }

    fn scroll_up(&mut self, wrap: WrapWidth, lines: usize) {
        scroll_up(
            &self.buffer,
            wrap,
            &mut self.viewport,
            &mut self.cursor,
            lines,
            self.view_end,
        );
    }

    fn update_search(&mut self) {
        if let Interaction::AwaitingInput { direction, query } = &self.interaction {
            self.search.update(
                &self.buffer,
                *direction,
                query,
                &mut self.cursor,
                &mut self.viewport,
            );
        }
    }

    fn refresh_index(&mut self) {
        let layout = self.layout();
        if self.index.layout() != layout {
            trace!(wrap = layout.wrap.get(), "rebuilding row index");
            self.index = RowIndex::build(&self.buffer, layout);
        }
    }
}

fn gutter_columns(options: &SessionOptions) -> usize {
    if options.show_gutter {
        options.gutter_width
    } else {
        0
    }
}

fn layout_for(viewport: &Viewport, options: &SessionOptions) -> LayoutParams {
    let wrap = WrapWidth::saturating(viewport.width().saturating_sub(gutter_columns(options)));
    LayoutParams::new(wrap, options.tab)
}

// ===== Tests =====

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
