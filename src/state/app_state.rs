//! Application-level state.

use super::Notification;

/// Which of the two generator forms has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormKind {
    #[default]
    Purchase,
    Sale,
}

impl FormKind {
    /// The other form.
    pub fn toggled(self) -> Self {
        match self {
            Self::Purchase => Self::Sale,
            Self::Sale => Self::Purchase,
        }
    }

    /// Panel title shown in the UI.
    pub fn title(self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Sale => "Sale",
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Form with keyboard focus.
    pub focused_form: FormKind,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Check if a field is being edited.
    pub fn is_editing(&self) -> bool {
        self.input_mode == InputMode::Insert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_toggle() {
        assert_eq!(FormKind::Purchase.toggled(), FormKind::Sale);
        assert_eq!(FormKind::Sale.toggled(), FormKind::Purchase);
    }
}
