use crate::ui::style::field;
use crate::ui::{Graphics, InputEvent, KeyCode};

/// Apply an editing key to `value`, returning the new text if the key edits it.
///
/// The cursor always sits at the end of the text.
pub fn edit_text(value: &str, event: &InputEvent) -> Option<String> {
    if let Some(ch) = event.typed_char() {
        let mut next = value.to_string();
        next.push(ch);
        return Some(next);
    }
    match event.key {
        KeyCode::Backspace if !value.is_empty() => {
            let mut next = value.to_string();
            next.pop();
            Some(next)
        }
        KeyCode::Delete if !value.is_empty() => Some(String::new()),
        _ => None,
    }
}

/// A labeled single-line text input, drawn on two rows
pub struct TextField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
}

impl TextField<'_> {
    pub const HEIGHT: u16 = 2;

    /// Render the field at the given position, returns the height used
    pub fn render(&self, g: &mut dyn Graphics, x: u16, y: u16, width: u16) -> u16 {
        g.set_style(if self.focused {
            field::LABEL_FOCUSED
        } else {
            field::LABEL
        });
        g.put_str(x, y, &truncate(self.label, width as usize));

        let input_y = y + 1;
        let input_width = width.max(2);
        g.set_style(if self.focused {
            field::BRACKET_FOCUSED
        } else {
            field::BRACKET
        });
        g.put_char(x, input_y, '[');
        g.put_char(x + input_width - 1, input_y, ']');

        let content_x = x + 1;
        // one cell stays free for the cursor
        let content_width = input_width.saturating_sub(3) as usize;

        if self.value.is_empty() && !self.focused {
            g.set_style(field::PLACEHOLDER);
            g.put_str(content_x, input_y, &truncate(self.placeholder, content_width + 1));
            return Self::HEIGHT;
        }

        // Keep the end of long values visible
        let len = self.value.chars().count();
        let shown: String = self
            .value
            .chars()
            .skip(len.saturating_sub(content_width))
            .collect();
        g.set_style(field::VALUE);
        g.put_str(content_x, input_y, &shown);

        if self.focused {
            g.set_style(field::CURSOR);
            g.put_char(content_x + shown.chars().count() as u16, input_y, ' ');
        }

        Self::HEIGHT
    }
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
