//! Input event types and key-binding matching.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A processed key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

impl InputEvent {
    /// Check if this matches a key binding string (e.g., "Ctrl+q", "Enter").
    pub fn matches(&self, binding: &str) -> bool {
        let mut expected_ctrl = false;
        let mut expected_alt = false;
        let mut expected_shift = false;
        let mut expected_key = "";

        for part in binding.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" => expected_ctrl = true,
                "alt" => expected_alt = true,
                "shift" => expected_shift = true,
                _ => expected_key = part,
            }
        }

        // Shift is implicit in the character for single-key bindings like '?'.
        let shift_ok = match self.code {
            KeyCode::Char(_) => true,
            _ => self.shift == expected_shift,
        };
        if self.ctrl != expected_ctrl || self.alt != expected_alt || !shift_ok {
            return false;
        }

        match expected_key.to_lowercase().as_str() {
            "enter" => self.code == KeyCode::Enter,
            "esc" | "escape" => self.code == KeyCode::Esc,
            "backspace" => self.code == KeyCode::Backspace,
            "delete" | "del" => self.code == KeyCode::Delete,
            "tab" => self.code == KeyCode::Tab,
            "space" => self.code == KeyCode::Char(' '),
            "up" => self.code == KeyCode::Up,
            "down" => self.code == KeyCode::Down,
            "left" => self.code == KeyCode::Left,
            "right" => self.code == KeyCode::Right,
            key => match key.chars().next() {
                Some(c) if key.len() == c.len_utf8() => {
                    self.code == KeyCode::Char(c)
                        || self.code == KeyCode::Char(c.to_ascii_uppercase())
                }
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
        InputEvent::from(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_char_binding() {
        assert!(key(KeyCode::Char('q'), KeyModifiers::NONE).matches("q"));
        assert!(!key(KeyCode::Char('w'), KeyModifiers::NONE).matches("q"));
    }

    #[test]
    fn test_shifted_char_binding() {
        // '?' arrives as Char('?') with SHIFT set on some terminals.
        assert!(key(KeyCode::Char('?'), KeyModifiers::SHIFT).matches("?"));
        assert!(key(KeyCode::Char('?'), KeyModifiers::NONE).matches("?"));
    }

    #[test]
    fn test_modifier_binding() {
        assert!(key(KeyCode::Char('c'), KeyModifiers::CONTROL).matches("Ctrl+c"));
        assert!(!key(KeyCode::Char('c'), KeyModifiers::NONE).matches("Ctrl+c"));
    }

    #[test]
    fn test_named_keys() {
        assert!(key(KeyCode::Enter, KeyModifiers::NONE).matches("Enter"));
        assert!(key(KeyCode::Esc, KeyModifiers::NONE).matches("Esc"));
        assert!(key(KeyCode::Tab, KeyModifiers::NONE).matches("tab"));
    }
}
