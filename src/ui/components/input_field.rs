//! Single-line text input.
//!
//! The field is controlled: `value` always mirrors what the caller last set.
//! Key handling reports the value the user asked for and leaves it to the
//! caller to feed it back through [`InputField::set_value`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
}

impl InputKind {
    /// Whether a typed character is accepted by this kind of field
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputKind::Number => c.is_ascii_digit() || c == '-' || c == '.',
            InputKind::Tel => c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'),
            _ => !c.is_control(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub value: String,
    pub placeholder: String,
    pub kind: InputKind,
    pub disabled: bool,
    pub required: bool,
    /// Cursor position in characters
    pub cursor: usize,
}

impl InputField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            ..Default::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Replace the value from the owning state, keeping the cursor in range
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.cursor.min(self.value.chars().count());
    }

    /// Move the cursor past the last character
    pub fn move_to_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// A required field with no value
    pub fn is_invalid(&self) -> bool {
        self.required && self.value.is_empty()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Handle a key press.
    ///
    /// Returns `Some(new_value)` when the key edits the text. Cursor movement
    /// is applied locally and returns `None`.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        if self.disabled {
            return None;
        }

        let char_count = self.value.chars().count();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if !self.kind.accepts(c) {
                    return None;
                }
                let mut next = self.value.clone();
                next.insert(self.byte_index(self.cursor), c);
                self.cursor += 1;
                Some(next)
            }
            KeyCode::Backspace if self.cursor > 0 => {
                let mut next = self.value.clone();
                let start = self.byte_index(self.cursor - 1);
                let end = self.byte_index(self.cursor);
                next.replace_range(start..end, "");
                self.cursor -= 1;
                Some(next)
            }
            KeyCode::Delete if self.cursor < char_count => {
                let mut next = self.value.clone();
                let start = self.byte_index(self.cursor);
                let end = self.byte_index(self.cursor + 1);
                next.replace_range(start..end, "");
                Some(next)
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(char_count);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = char_count;
                None
            }
            _ => None,
        }
    }

    /// Text as displayed, with password masking applied
    pub fn display_value(&self) -> String {
        match self.kind {
            InputKind::Password => "•".repeat(self.value.chars().count()),
            _ => self.value.clone(),
        }
    }

    /// Render the field as a line; `editing` draws the cursor block
    pub fn to_line(&self, editing: bool) -> Line<'static> {
        let text_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else if self.is_invalid() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };

        if self.value.is_empty() && !editing {
            let placeholder_style = if self.is_invalid() {
                Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
            };
            return Line::from(Span::styled(self.placeholder.clone(), placeholder_style));
        }

        let display = self.display_value();
        if !editing {
            return Line::from(Span::styled(display, text_style));
        }

        let split = display
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(display.len());
        let (before, after) = display.split_at(split);
        let mut after_chars = after.chars();
        let under_cursor = after_chars.next().map(String::from).unwrap_or_else(|| " ".to_string());

        Line::from(vec![
            Span::styled(before.to_string(), text_style),
            Span::styled(under_cursor, text_style.add_modifier(Modifier::REVERSED)),
            Span::styled(after_chars.collect::<String>(), text_style),
        ])
    }

    /// Display width of the current value, in cells
    pub fn width(&self) -> usize {
        self.display_value().width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_reports_without_committing() {
        let mut field = InputField::new("ab");
        assert_eq!(field.handle_key(key(KeyCode::Char('c'))), Some("abc".to_string()));
        assert_eq!(field.value, "ab");
    }

    #[test]
    fn test_insert_at_cursor_with_multibyte() {
        let mut field = InputField::new("héllo");
        field.cursor = 2;
        assert_eq!(field.handle_key(key(KeyCode::Char('x'))), Some("héxllo".to_string()));
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = InputField::new("abc");
        assert_eq!(field.handle_key(key(KeyCode::Backspace)), Some("ab".to_string()));
        field.set_value("ab");
        field.cursor = 0;
        assert_eq!(field.handle_key(key(KeyCode::Backspace)), None);
        assert_eq!(field.handle_key(key(KeyCode::Delete)), Some("b".to_string()));
    }

    #[test]
    fn test_number_kind_filters() {
        let mut field = InputField::new("").kind(InputKind::Number);
        assert_eq!(field.handle_key(key(KeyCode::Char('a'))), None);
        assert_eq!(field.handle_key(key(KeyCode::Char('4'))), Some("4".to_string()));
    }

    #[test]
    fn test_disabled_ignores_input() {
        let mut field = InputField::new("x").disabled(true);
        assert_eq!(field.handle_key(key(KeyCode::Char('y'))), None);
    }

    #[test]
    fn test_password_masked() {
        let field = InputField::new("secret").kind(InputKind::Password);
        assert_eq!(field.display_value(), "••••••");
    }

    #[test]
    fn test_set_value_clamps_cursor() {
        let mut field = InputField::new("abcdef");
        field.set_value("ab");
        assert_eq!(field.cursor, 2);
    }
}
