//! State management for shopgen.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture.

mod app_state;
mod form_state;

pub use app_state::{AppState, FormKind, InputMode};
pub use form_state::{FieldKind, FormState};

use crate::commands::{generate_purchase_commands, generate_sale_commands};
use crate::config::GeneratorConfig;
use crate::error::Result;
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    FocusForm(FormKind),
    ToggleForm,
    SetInputMode(InputMode),
    FocusPrevField,
    FocusNextField,

    // Field editing
    InsertChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,

    // Form actions
    Submit,
    ClearForm,
    CopyOutput,

    // UI actions
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
        }
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Purchase form state.
    pub purchase: FormState,
    /// Sale form state.
    pub sale: FormState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, generator: &GeneratorConfig) -> Self {
        Self {
            app: AppState::default(),
            purchase: FormState::with_default_objective(&generator.default_objective),
            sale: FormState::with_default_objective(&generator.default_objective),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// The form that currently has focus.
    pub fn focused_form(&self) -> &FormState {
        match self.app.focused_form {
            FormKind::Purchase => &self.purchase,
            FormKind::Sale => &self.sale,
        }
    }

    fn focused_form_mut(&mut self) -> &mut FormState {
        match self.app.focused_form {
            FormKind::Purchase => &mut self.purchase,
            FormKind::Sale => &mut self.sale,
        }
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Navigation
            Action::FocusForm(form) => self.app.focused_form = form,
            Action::ToggleForm => {
                self.app.focused_form = self.app.focused_form.toggled();
            }
            Action::SetInputMode(mode) => self.app.input_mode = mode,
            Action::FocusPrevField => self.focused_form_mut().focus_prev(),
            Action::FocusNextField => self.focused_form_mut().focus_next(),

            // Field editing
            Action::InsertChar(c) => {
                self.focused_form_mut().push_char(c);
            }
            Action::DeleteChar => self.focused_form_mut().pop_char(),
            Action::CursorLeft => self.focused_form_mut().cursor_left(),
            Action::CursorRight => self.focused_form_mut().cursor_right(),

            // Form actions
            Action::Submit => self.submit(),
            Action::ClearForm => self.focused_form_mut().clear(),
            // Handled by the app layer (clipboard side effect).
            Action::CopyOutput => {}

            // UI actions
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::DismissNotification => {
                self.app.notification = None;
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }

    /// Generate commands for the focused form, replacing its last result.
    fn submit(&mut self) {
        let kind = self.app.focused_form;
        let form = self.focused_form_mut();
        match form.to_spec() {
            Ok(spec) => {
                let result = match kind {
                    FormKind::Purchase => generate_purchase_commands(&spec),
                    FormKind::Sale => generate_sale_commands(&spec),
                };
                tracing::info!(form = kind.title(), "generated {} commands", result.commands.len());
                form.result = Some(result);
                self.app.notification = Some(Notification::success(format!(
                    "{} commands generated",
                    kind.title()
                )));
            }
            Err(field) => {
                self.app.notification = Some(Notification::error(format!(
                    "{} is required",
                    field.label()
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx, &GeneratorConfig::default())
    }

    fn fill_focused_form(store: &mut Store, values: [&str; 6]) {
        store.focused_form_mut().clear();
        for (i, text) in values.iter().enumerate() {
            store.focused_form_mut().focused_field = i;
            for c in text.chars() {
                store.reduce(Action::InsertChar(c));
            }
        }
    }

    #[test]
    fn test_submit_stores_result_for_focused_form_only() {
        let mut store = test_store();
        fill_focused_form(
            &mut store,
            ["diamond_sword", "1", "10", "coins", "Thanks!", "Too poor"],
        );
        store.reduce(Action::Submit);

        assert!(store.purchase.result.is_some());
        assert!(store.sale.result.is_none());
        assert_eq!(
            store.purchase.result.as_ref().unwrap().commands[0],
            "/give @initiator[scores={coins=10..}] diamond_sword 1"
        );
    }

    #[test]
    fn test_submit_replaces_previous_result() {
        let mut store = test_store();
        fill_focused_form(&mut store, ["apple", "1", "3", "coins", "ok", "no"]);
        store.reduce(Action::Submit);
        let first = store.purchase.result.clone().unwrap();

        fill_focused_form(&mut store, ["bread", "2", "4", "coins", "ok", "no"]);
        store.reduce(Action::Submit);
        let second = store.purchase.result.clone().unwrap();

        assert_ne!(first.commands, second.commands);
        assert!(second.commands[0].contains("bread"));
    }

    #[test]
    fn test_submit_with_empty_field_is_rejected() {
        let mut store = test_store();
        fill_focused_form(&mut store, ["apple", "", "3", "coins", "ok", "no"]);
        store.reduce(Action::Submit);

        assert!(store.purchase.result.is_none());
        let notification = store.app.notification.take().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert!(notification.message.contains("Quantity"));
    }

    #[test]
    fn test_forms_are_independent() {
        let mut store = test_store();
        fill_focused_form(&mut store, ["apple", "1", "3", "coins", "ok", "no"]);
        store.reduce(Action::Submit);

        store.reduce(Action::ToggleForm);
        fill_focused_form(&mut store, ["emerald", "5", "20", "coins", "ok", "no"]);
        store.reduce(Action::Submit);

        let purchase = store.purchase.result.as_ref().unwrap();
        let sale = store.sale.result.as_ref().unwrap();
        assert!(purchase.commands[0].starts_with("/give"));
        assert!(sale.commands[0].starts_with("/tellraw"));
        assert!(sale.commands[5].ends_with("emerald 0 5"));
    }

    #[test]
    fn test_toggle_and_focus_navigation() {
        let mut store = test_store();
        assert_eq!(store.app.focused_form, FormKind::Purchase);
        store.reduce(Action::ToggleForm);
        assert_eq!(store.app.focused_form, FormKind::Sale);
        store.reduce(Action::FocusForm(FormKind::Purchase));
        assert_eq!(store.app.focused_form, FormKind::Purchase);

        store.reduce(Action::FocusNextField);
        assert_eq!(store.purchase.focused_field, 1);
        assert_eq!(store.sale.focused_field, 0);
    }

    #[test]
    fn test_quit_and_help() {
        let mut store = test_store();
        store.reduce(Action::ToggleHelp);
        assert!(store.app.show_help);
        store.reduce(Action::Quit);
        assert!(store.app.should_quit);
    }
}
