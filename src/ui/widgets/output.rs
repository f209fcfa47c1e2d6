//! Generated command output panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{FormKind, Store};

/// Output panel showing the last generated command set for a form.
pub struct OutputPanel;

impl OutputPanel {
    /// Render the output area below a form.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, kind: FormKind) {
        let form = match kind {
            FormKind::Purchase => &store.purchase,
            FormKind::Sale => &store.sale,
        };
        let focused = store.app.focused_form == kind;

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let (title, content) = match &form.result {
            Some(result) => (
                format!(
                    " Generated Commands ({}) ",
                    result.generated_at.format("%H:%M:%S")
                ),
                result
                    .commands
                    .iter()
                    .map(|cmd| Line::from(Span::styled(cmd.clone(), Style::default().fg(Color::White))))
                    .collect::<Vec<_>>(),
            ),
            None => (
                " Generated Commands ".to_string(),
                vec![Line::from(Span::styled(
                    "Press g to generate, y to copy",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ))],
            ),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(
            Paragraph::new(content).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}
