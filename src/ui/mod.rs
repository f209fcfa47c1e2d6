//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{FormPanel, HelpPanel, OutputPanel, StatusBar, TabBar};

use crate::config::UiConfig;
use crate::state::{FormKind, Store};
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, ui_config: &UiConfig) {
        let layout = Layout::new(
            frame.area(),
            ui_config.show_status_bar,
            ui_config.show_tab_bar,
        );

        // Render status bar
        if ui_config.show_status_bar {
            StatusBar::render(frame, layout.status_area, store);
        }

        // Render tab bar
        if ui_config.show_tab_bar {
            TabBar::render(frame, layout.tab_area, store);
        }

        // Each generator panel: form on top, output underneath.
        for (kind, area) in [
            (FormKind::Purchase, layout.purchase_area),
            (FormKind::Sale, layout.sale_area),
        ] {
            let (form_area, output_area) = layout::split_panel(area);
            FormPanel::render(frame, form_area, store, kind);
            OutputPanel::render(frame, output_area, store, kind);
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area());
        }

        // Render notification if present
        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }
    }
}
