//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Tab bar area.
    pub tab_area: Rect,
    /// Purchase panel (left half of the main area).
    pub purchase_area: Rect,
    /// Sale panel (right half of the main area).
    pub sale_area: Rect,
    /// Notification area (overlaid).
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area. Hidden bars collapse to
    /// zero height.
    pub fn new(area: Rect, show_status_bar: bool, show_tab_bar: bool) -> Self {
        let bar = |show: bool| Constraint::Length(if show { 1 } else { 0 });
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                bar(show_status_bar), // Status bar
                bar(show_tab_bar),    // Tab bar
                Constraint::Min(0),   // Main content
            ])
            .split(area);

        // The two generator panels sit side by side.
        let columns = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        // Notification area is centered in the main area
        let notification_area = Rect {
            x: area.width / 4,
            y: area.height.saturating_sub(4) / 2,
            width: area.width / 2,
            height: 3,
        };

        Self {
            status_area: chunks[0],
            tab_area: chunks[1],
            purchase_area: columns[0],
            sale_area: columns[1],
            notification_area,
        }
    }
}

/// Split a panel area into form (top) and output (bottom) halves.
pub fn split_panel(area: Rect) -> (Rect, Rect) {
    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);
    (rows[0], rows[1])
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
