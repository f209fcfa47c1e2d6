//! Per-form field state.
//!
//! Each generator form owns six named fields plus the last generated result.
//! Numeric fields accept digit input only, the terminal stand-in for a
//! native number input.

use crate::commands::{CommandSet, TransactionSpec};

/// The six fields of a transaction form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Item,
    Quantity,
    Price,
    Scoreboard,
    SuccessMessage,
    ErrorMessage,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Item,
        FieldKind::Quantity,
        FieldKind::Price,
        FieldKind::Scoreboard,
        FieldKind::SuccessMessage,
        FieldKind::ErrorMessage,
    ];

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Item => "Item",
            Self::Quantity => "Quantity",
            Self::Price => "Price",
            Self::Scoreboard => "Scoreboard",
            Self::SuccessMessage => "Success Message",
            Self::ErrorMessage => "Error Message",
        }
    }

    /// Whether this field only accepts digit input.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Quantity | Self::Price)
    }
}

/// State of one generator form.
#[derive(Debug, Default)]
pub struct FormState {
    /// Field values, indexed in step with [`FieldKind::ALL`].
    values: [String; 6],
    /// Index of the focused field.
    pub focused_field: usize,
    /// Cursor position within the focused field's value.
    pub cursor_position: usize,
    /// Last generated result, replaced wholesale on each submission.
    pub result: Option<CommandSet>,
}

impl FormState {
    /// Create a form with the scoreboard field prefilled.
    pub fn with_default_objective(objective: &str) -> Self {
        let mut form = Self::default();
        form.values[3] = objective.to_string();
        form
    }

    /// The focused field.
    pub fn focused(&self) -> FieldKind {
        FieldKind::ALL[self.focused_field]
    }

    /// Value of a field.
    pub fn value(&self, field: FieldKind) -> &str {
        &self.values[Self::index_of(field)]
    }

    /// Move focus up one field, saturating at the first.
    pub fn focus_prev(&mut self) {
        self.focused_field = self.focused_field.saturating_sub(1);
        self.reset_cursor();
    }

    /// Move focus down one field, saturating at the last.
    pub fn focus_next(&mut self) {
        if self.focused_field + 1 < FieldKind::ALL.len() {
            self.focused_field += 1;
        }
        self.reset_cursor();
    }

    /// Insert a character at the cursor, filtering non-digits on numeric
    /// fields. Returns whether the character was accepted.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.focused().is_numeric() && !c.is_ascii_digit() {
            return false;
        }
        let value = &mut self.values[self.focused_field];
        let byte_idx = Self::byte_index(value, self.cursor_position);
        value.insert(byte_idx, c);
        self.cursor_position += 1;
        true
    }

    /// Remove the character before the cursor.
    pub fn pop_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let value = &mut self.values[self.focused_field];
            let byte_idx = Self::byte_index(value, self.cursor_position);
            value.remove(byte_idx);
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        let len = self.values[self.focused_field].chars().count();
        if self.cursor_position < len {
            self.cursor_position += 1;
        }
    }

    /// Clear all fields and the result.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        self.result = None;
        self.focused_field = 0;
        self.cursor_position = 0;
    }

    /// Build a [`TransactionSpec`] from the current values.
    ///
    /// Any empty field rejects the submission, naming the field. The
    /// generators never see an incomplete spec.
    pub fn to_spec(&self) -> std::result::Result<TransactionSpec, FieldKind> {
        for field in FieldKind::ALL {
            if self.value(field).is_empty() {
                return Err(field);
            }
        }
        Ok(TransactionSpec {
            item: self.value(FieldKind::Item).to_string(),
            quantity: Self::parse_number(self.value(FieldKind::Quantity)),
            price: Self::parse_number(self.value(FieldKind::Price)),
            scoreboard: self.value(FieldKind::Scoreboard).to_string(),
            success_message: self.value(FieldKind::SuccessMessage).to_string(),
            error_message: self.value(FieldKind::ErrorMessage).to_string(),
        })
    }

    fn reset_cursor(&mut self) {
        self.cursor_position = self.values[self.focused_field].chars().count();
    }

    // A long enough run of digits still overflows i64; clamp rather than
    // reject.
    fn parse_number(value: &str) -> i64 {
        value.parse().unwrap_or(i64::MAX)
    }

    fn index_of(field: FieldKind) -> usize {
        FieldKind::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0)
    }

    fn byte_index(value: &str, char_idx: usize) -> usize {
        value
            .char_indices()
            .map(|(i, _)| i)
            .nth(char_idx)
            .unwrap_or(value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        let mut form = FormState::default();
        for (i, text) in ["emerald", "5", "20", "coins", "Sold!", "No emeralds"]
            .iter()
            .enumerate()
        {
            form.focused_field = i;
            form.cursor_position = 0;
            for c in text.chars() {
                form.push_char(c);
            }
        }
        form.focused_field = 0;
        form
    }

    #[test]
    fn test_numeric_fields_reject_non_digits() {
        let mut form = FormState::default();
        form.focused_field = 1; // Quantity
        assert!(form.push_char('4'));
        assert!(!form.push_char('x'));
        assert!(!form.push_char('-'));
        assert_eq!(form.value(FieldKind::Quantity), "4");
    }

    #[test]
    fn test_text_fields_accept_anything() {
        let mut form = FormState::default();
        for c in "§aOk!".chars() {
            assert!(form.push_char(c));
        }
        assert_eq!(form.value(FieldKind::Item), "§aOk!");
    }

    #[test]
    fn test_cursor_editing() {
        let mut form = FormState::default();
        for c in "emrald".chars() {
            form.push_char(c);
        }
        // Fix the typo: insert the missing 'e' after "em".
        form.cursor_position = 2;
        form.push_char('e');
        assert_eq!(form.value(FieldKind::Item), "emerald");

        form.pop_char();
        assert_eq!(form.value(FieldKind::Item), "emrald");
        assert_eq!(form.cursor_position, 2);
    }

    #[test]
    fn test_to_spec_requires_every_field() {
        let mut form = filled_form();
        assert!(form.to_spec().is_ok());

        form.focused_field = 4; // Success Message
        form.cursor_position = 5;
        for _ in 0..5 {
            form.pop_char();
        }
        assert_eq!(form.to_spec(), Err(FieldKind::SuccessMessage));
    }

    #[test]
    fn test_to_spec_parses_numbers() {
        let spec = filled_form().to_spec().unwrap();
        assert_eq!(spec.quantity, 5);
        assert_eq!(spec.price, 20);
        assert_eq!(spec.item, "emerald");
        assert_eq!(spec.scoreboard, "coins");
    }

    #[test]
    fn test_default_objective_prefill() {
        let form = FormState::with_default_objective("coins");
        assert_eq!(form.value(FieldKind::Scoreboard), "coins");
        assert_eq!(form.value(FieldKind::Item), "");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = filled_form();
        form.result = Some(crate::commands::generate_sale_commands(
            &form.to_spec().unwrap(),
        ));
        form.clear();
        assert!(form.result.is_none());
        assert_eq!(form.value(FieldKind::Item), "");
        assert_eq!(form.focused_field, 0);
    }

    #[test]
    fn test_focus_saturates_at_ends() {
        let mut form = FormState::default();
        form.focus_prev();
        assert_eq!(form.focused_field, 0);
        for _ in 0..10 {
            form.focus_next();
        }
        assert_eq!(form.focused_field, FieldKind::ALL.len() - 1);
    }
}
