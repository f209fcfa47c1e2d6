//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::state::{Action, FormKind, Notification, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// System clipboard, absent on headless terminals.
    clipboard: Option<Clipboard>,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.ui.mouse_support {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store
        let store = Store::new(action_tx.clone(), &config.generator);

        // Create event handler
        let event_handler = EventHandler::new(action_tx, config.keybindings.clone());

        // Try to connect to the system clipboard
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("Failed to access system clipboard: {}", e);
                None
            }
        };

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            clipboard,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store, &self.config.ui);
            })?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action);
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::CopyOutput => self.copy_output(),
            _ => {
                // Let the store handle the action
                self.store.reduce(action);
            }
        }
    }

    /// Copy the focused form's generated commands to the clipboard.
    fn copy_output(&mut self) {
        let kind = self.store.app.focused_form;
        let text = self.store.focused_form().result.as_ref().map(|r| r.joined());

        let notification = match (text, &mut self.clipboard) {
            (None, _) => Notification::info("Nothing to copy yet"),
            (Some(_), None) => Notification::error("No clipboard available"),
            (Some(text), Some(clipboard)) => match clipboard.set_text(text) {
                Ok(()) => {
                    tracing::info!(form = kind.title(), "copied commands to clipboard");
                    Notification::success(copy_message(kind))
                }
                Err(e) => {
                    tracing::warn!("Clipboard write failed: {}", e);
                    Notification::error(format!("Copy failed: {e}"))
                }
            },
        };

        self.store.reduce(Action::ShowNotification(notification));
    }
}

fn copy_message(kind: FormKind) -> String {
    format!("{} commands copied to clipboard", kind.title())
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
