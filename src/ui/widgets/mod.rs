//! TUI widgets.

mod form;
mod help;
mod notifications;
mod output;
mod status_bar;
mod tab_bar;

pub use form::FormPanel;
pub use help::HelpPanel;
pub use notifications::render_notification;
pub use output::OutputPanel;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
