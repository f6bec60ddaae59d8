//! Search prompt input handling (pure state transitions).
//!
//! Tracks what the user has typed into the search prompt. Executing the
//! search is left to [`crate::state::SearchState`]; this module only changes
//! the prompt state.

use crate::state::SearchDirection;

/// Whether the session is reading keys as commands or as a search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Interaction {
    /// Keys are navigation commands.
    #[default]
    Idle,
    /// Keys are appended to the search query.
    AwaitingInput {
        /// Direction the committed search will run in.
        direction: SearchDirection,
        /// Text typed so far.
        query: String,
    },
}

/// A key while the search prompt is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchInput {
    /// Append a character to the query.
    Char(char),
    /// Drop the last character of the query.
    Backspace,
    /// Keep the current match and close the prompt.
    Commit,
    /// Close the prompt and return to where the search started.
    Cancel,
}

/// How a search prompt was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The user accepted the query.
    Committed {
        /// Direction the prompt was opened with.
        direction: SearchDirection,
        /// Final query text.
        query: String,
    },
    /// The user abandoned the prompt.
    Cancelled,
}

/// Open the search prompt with an empty query.
///
/// No-op if a prompt is already open.
pub fn activate_search_input(state: Interaction, direction: SearchDirection) -> Interaction {
    match state {
        Interaction::Idle => Interaction::AwaitingInput {
            direction,
            query: String::new(),
        },
        other => other,
    }
}

/// Append a character to the query. No-op when idle.
pub fn handle_char_input(state: Interaction, ch: char) -> Interaction {
    match state {
        Interaction::AwaitingInput {
            direction,
            mut query,
        } => {
            query.push(ch);
            Interaction::AwaitingInput { direction, query }
        }
        other => other,
    }
}

/// Drop the last character of the query. No-op when idle or empty.
pub fn handle_backspace(state: Interaction) -> Interaction {
    match state {
        Interaction::AwaitingInput {
            direction,
            mut query,
        } => {
            query.pop();
            Interaction::AwaitingInput { direction, query }
        }
        other => other,
    }
}

/// Close the prompt, keeping the query.
///
/// Returns `None` for the outcome when no prompt was open.
pub fn submit_search(state: Interaction) -> (Interaction, Option<InteractionOutcome>) {
    match state {
        Interaction::AwaitingInput { direction, query } => (
            Interaction::Idle,
            Some(InteractionOutcome::Committed { direction, query }),
        ),
        Interaction::Idle => (Interaction::Idle, None),
    }
}

/// Close the prompt, discarding the query.
pub fn cancel_search(state: Interaction) -> (Interaction, Option<InteractionOutcome>) {
    match state {
        Interaction::AwaitingInput { .. } => {
            (Interaction::Idle, Some(InteractionOutcome::Cancelled))
        }
        Interaction::Idle => (Interaction::Idle, None),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
