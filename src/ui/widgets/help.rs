//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(55, 70, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let section = |title: &'static str| {
            Line::from(vec![Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )])
        };
        let entry = |keys: &'static str, description: &'static str| {
            Line::from(vec![
                Span::styled(keys, Style::default().fg(Color::Cyan)),
                Span::raw(description),
            ])
        };

        let help_text = vec![
            section("Forms"),
            Line::from(""),
            entry("  Tab    ", "Switch between Purchase and Sale"),
            entry("  1 / 2  ", "Focus Purchase / Sale form"),
            entry("  j/k ↑/↓", "Move between fields"),
            entry("  Enter/i", "Edit the focused field"),
            entry("  Esc    ", "Stop editing / dismiss notification"),
            Line::from(""),
            section("Commands"),
            Line::from(""),
            entry("  g      ", "Generate commands for the focused form"),
            entry("  y      ", "Copy generated commands to clipboard"),
            entry("  c      ", "Clear the focused form"),
            Line::from(""),
            section("General"),
            Line::from(""),
            entry("  ?      ", "Toggle this help"),
            entry("  q      ", "Quit"),
        ];

        let help = Paragraph::new(help_text).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help, popup_area);
    }
}
