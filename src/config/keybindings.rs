//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::state::SearchDirection;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Character bindings are stored without modifiers. Terminals disagree on
/// whether `:` or `N` arrive with SHIFT set, so lookups ignore SHIFT for
/// character keys and match on the character alone.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&normalize(key)).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(normalize(key), action);
    }
}

/// Strip everything a binding does not depend on: event kind, lock state,
/// and SHIFT on character keys.
fn normalize(key: KeyEvent) -> KeyEvent {
    let modifiers = match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    };
    KeyEvent::new(key.code, modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);

        // Scrolling
        bindings.bind(plain(KeyCode::Down), KeyAction::ScrollDown);
        bindings.bind(plain(KeyCode::Up), KeyAction::ScrollUp);
        bindings.bind(plain(KeyCode::PageDown), KeyAction::PageDown);
        bindings.bind(plain(KeyCode::PageUp), KeyAction::PageUp);

        // Cursor movement
        bindings.bind(plain(KeyCode::Char('l')), KeyAction::MoveRight);
        bindings.bind(plain(KeyCode::Right), KeyAction::MoveRight);
        bindings.bind(plain(KeyCode::Char('j')), KeyAction::MoveLeft);
        bindings.bind(plain(KeyCode::Left), KeyAction::MoveLeft);
        bindings.bind(plain(KeyCode::Char('k')), KeyAction::MoveDown);
        bindings.bind(plain(KeyCode::Char('i')), KeyAction::MoveUp);
        bindings.bind(plain(KeyCode::Char('L')), KeyAction::LineEnd);
        bindings.bind(plain(KeyCode::End), KeyAction::LineEnd);
        bindings.bind(plain(KeyCode::Char('J')), KeyAction::LineStart);
        bindings.bind(plain(KeyCode::Home), KeyAction::LineStart);
        bindings.bind(plain(KeyCode::Char('>')), KeyAction::GotoEnd);
        bindings.bind(plain(KeyCode::Char('<')), KeyAction::GotoStart);

        // Search
        bindings.bind(
            plain(KeyCode::Char(';')),
            KeyAction::StartSearch(SearchDirection::Forward),
        );
        bindings.bind(
            plain(KeyCode::Char(':')),
            KeyAction::StartSearch(SearchDirection::Backward),
        );
        bindings.bind(
            plain(KeyCode::Char('n')),
            KeyAction::RepeatSearch(SearchDirection::Forward),
        );
        bindings.bind(
            plain(KeyCode::Char('N')),
            KeyAction::RepeatSearch(SearchDirection::Backward),
        );

        // Display
        bindings.bind(plain(KeyCode::Char('0')), KeyAction::ToggleGutter);

        // Application controls
        bindings.bind(plain(KeyCode::Char('q')), KeyAction::Quit);
        bindings.bind(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        bindings
    }
}
