//! Event handler for processing input events.

use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, FormKind, InputMode, Store};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Action sender (for future async dispatch).
    #[allow(dead_code)]
    action_tx: mpsc::UnboundedSender<Action>,
    /// Key bindings.
    keybindings: KeyBindings,
    /// Input mode at the last render, drives mode-aware handling.
    input_mode: InputMode,
}

impl EventHandler {
    /// Create a new event handler with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, keybindings: KeyBindings) -> Self {
        Self {
            action_tx,
            keybindings,
            input_mode: InputMode::Normal,
        }
    }

    /// Update the mode snapshot for mode-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.input_mode = store.app.input_mode;
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            match event {
                CrosstermEvent::Key(key) => {
                    if let Some(action) = self.handle_key(key) {
                        return Ok(Some(action));
                    }
                }
                CrosstermEvent::Resize(_, _) => {
                    // Terminal will automatically redraw
                }
                _ => {}
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Insert => self.handle_insert_mode(key),
        }
    }

    fn handle_normal_mode(&self, key: KeyEvent) -> Option<Action> {
        let input = super::InputEvent::from(key);

        // Global shortcuts
        if input.matches(&self.keybindings.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&self.keybindings.help) {
            return Some(Action::ToggleHelp);
        }

        // Form switching
        if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
            return Some(Action::ToggleForm);
        }
        if input.matches(&self.keybindings.purchase) {
            return Some(Action::FocusForm(FormKind::Purchase));
        }
        if input.matches(&self.keybindings.sale) {
            return Some(Action::FocusForm(FormKind::Sale));
        }

        // Field navigation
        if input.matches(&self.keybindings.up) || key.code == KeyCode::Up {
            return Some(Action::FocusPrevField);
        }
        if input.matches(&self.keybindings.down) || key.code == KeyCode::Down {
            return Some(Action::FocusNextField);
        }

        // Form actions
        if input.matches(&self.keybindings.edit) || key.code == KeyCode::Enter {
            return Some(Action::SetInputMode(InputMode::Insert));
        }
        if input.matches(&self.keybindings.generate) {
            return Some(Action::Submit);
        }
        if input.matches(&self.keybindings.copy) {
            return Some(Action::CopyOutput);
        }
        if input.matches(&self.keybindings.clear) {
            return Some(Action::ClearForm);
        }
        if input.matches(&self.keybindings.back) {
            return Some(Action::DismissNotification);
        }

        None
    }

    fn handle_insert_mode(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::SetInputMode(InputMode::Normal)),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Left => Some(Action::CursorLeft),
            KeyCode::Right => Some(Action::CursorRight),
            KeyCode::Up => Some(Action::FocusPrevField),
            KeyCode::Down | KeyCode::Tab => Some(Action::FocusNextField),
            KeyCode::Char(c) => Some(Action::InsertChar(c)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn handler() -> EventHandler {
        let (tx, _rx) = mpsc::unbounded_channel();
        EventHandler::new(tx, KeyBindings::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let h = handler();
        assert!(matches!(h.handle_key(press(KeyCode::Char('q'))), Some(Action::Quit)));
        assert!(matches!(h.handle_key(press(KeyCode::Char('g'))), Some(Action::Submit)));
        assert!(matches!(
            h.handle_key(press(KeyCode::Char('y'))),
            Some(Action::CopyOutput)
        ));
        assert!(matches!(
            h.handle_key(press(KeyCode::Tab)),
            Some(Action::ToggleForm)
        ));
        assert!(matches!(
            h.handle_key(press(KeyCode::Char('2'))),
            Some(Action::FocusForm(FormKind::Sale))
        ));
    }

    #[test]
    fn test_insert_mode_passes_characters_through() {
        let mut h = handler();
        h.input_mode = InputMode::Insert;
        assert!(matches!(
            h.handle_key(press(KeyCode::Char('q'))),
            Some(Action::InsertChar('q'))
        ));
        assert!(matches!(
            h.handle_key(press(KeyCode::Backspace)),
            Some(Action::DeleteChar)
        ));
        assert!(matches!(
            h.handle_key(press(KeyCode::Esc)),
            Some(Action::SetInputMode(InputMode::Normal))
        ));
    }
}
