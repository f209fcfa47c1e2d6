//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{InputMode, Store};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let mode = match store.app.input_mode {
            InputMode::Normal => Span::styled(" NORMAL ", Style::default().fg(Color::Green)),
            InputMode::Insert => Span::styled(" INSERT ", Style::default().fg(Color::Yellow)),
        };

        let form = Span::styled(
            format!(" {} ", store.app.focused_form.title()),
            Style::default().fg(Color::Cyan),
        );

        let help_hint = Span::styled(" Press ? for help ", Style::default().fg(Color::DarkGray));

        let left_content = vec![
            Span::styled(
                " shopgen ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("|"),
            mode,
            Span::raw("|"),
            form,
        ];

        let status_line = Line::from(left_content);

        // Calculate padding for right-aligned help hint
        let left_len: usize = status_line.spans.iter().map(|s| s.content.len()).sum();
        let right_len = help_hint.content.len();
        let padding = area
            .width
            .saturating_sub(left_len as u16 + right_len as u16);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding as usize)));
        full_line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}
