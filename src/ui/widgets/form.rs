//! Generator form panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{FieldKind, FormKind, FormState, InputMode, Store};

/// Width reserved for field labels inside the panel.
const LABEL_WIDTH: usize = 17;

/// A six-field transaction form.
pub struct FormPanel;

impl FormPanel {
    /// Render the form for one generator.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, kind: FormKind) {
        let form = match kind {
            FormKind::Purchase => &store.purchase,
            FormKind::Sale => &store.sale,
        };
        let focused = store.app.focused_form == kind;
        let editing = focused && store.app.input_mode == InputMode::Insert;

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let lines: Vec<Line> = FieldKind::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| field_line(form, *field, i, focused, editing))
            .collect();

        let block = Block::default()
            .title(format!(" {} ", kind.title()))
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(lines).block(block), area);

        // Place the terminal cursor inside the edited field.
        if editing {
            let col = area.x + 1 + LABEL_WIDTH as u16 + form.cursor_position as u16;
            let row = area.y + 1 + form.focused_field as u16;
            frame.set_cursor_position((col, row));
        }
    }
}

fn field_line(
    form: &FormState,
    field: FieldKind,
    index: usize,
    focused: bool,
    editing: bool,
) -> Line<'static> {
    let selected = focused && form.focused_field == index;

    let label_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value_style = if selected && editing {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else if selected {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let marker = if selected { "▶" } else { " " };
    let suffix = if field.is_numeric() { " (number)" } else { "" };
    let label = format!("{marker}{:<width$}", format!("{}{suffix}:", field.label()), width = LABEL_WIDTH - 1);

    Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(form.value(field).to_string(), value_style),
    ])
}
