use super::text_input::truncate;
use crate::ui::style::field;
use crate::ui::{Graphics, InputEvent, KeyCode};

/// Pick a neighbouring option for an arrow/Home/End key.
///
/// A value that is not one of the options behaves as if it sat just before
/// the first option.
pub fn cycle_option(options: &[String], current: &str, event: &InputEvent) -> Option<String> {
    if options.is_empty() || event.modifiers.ctrl || event.modifiers.alt {
        return None;
    }
    let last = options.len() - 1;
    let position = options.iter().position(|o| o == current);
    let next = match (event.key, position) {
        (KeyCode::Right, Some(i)) => (i + 1) % options.len(),
        (KeyCode::Right, None) => 0,
        (KeyCode::Left, Some(0)) | (KeyCode::Left, None) => last,
        (KeyCode::Left, Some(i)) => i - 1,
        (KeyCode::Home, _) => 0,
        (KeyCode::End, _) => last,
        _ => return None,
    };
    (position != Some(next)).then(|| options[next].clone())
}

/// A labeled choice field: `< value >  (n/total)`
pub struct ChoiceField<'a> {
    pub label: &'a str,
    pub options: &'a [String],
    pub value: &'a str,
    pub focused: bool,
}

impl ChoiceField<'_> {
    pub const HEIGHT: u16 = 2;

    pub fn render(&self, g: &mut dyn Graphics, x: u16, y: u16, width: u16) -> u16 {
        g.set_style(if self.focused {
            field::LABEL_FOCUSED
        } else {
            field::LABEL
        });
        g.put_str(x, y, &truncate(self.label, width as usize));

        let row = y + 1;
        if self.options.is_empty() {
            g.set_style(field::PLACEHOLDER);
            g.put_str(x, row, "(no options)");
            return Self::HEIGHT;
        }

        let position = self.options.iter().position(|o| o == self.value);
        let counter = match position {
            Some(i) => format!("({}/{})", i + 1, self.options.len()),
            None => format!("(-/{})", self.options.len()),
        };
        let value_width = (width as usize).saturating_sub(counter.chars().count() + 5);

        g.set_style(if self.focused {
            field::BRACKET_FOCUSED
        } else {
            field::BRACKET
        });
        g.put_str(x, row, "<");
        g.set_style(if self.focused { field::CURSOR } else { field::VALUE });
        let shown = truncate(self.value, value_width);
        g.put_str(x + 2, row, &shown);
        let after = x + 3 + shown.chars().count() as u16;
        g.set_style(if self.focused {
            field::BRACKET_FOCUSED
        } else {
            field::BRACKET
        });
        g.put_str(after, row, ">");
        g.set_style(field::PLACEHOLDER);
        g.put_str(after + 2, row, &counter);

        Self::HEIGHT
    }
}
