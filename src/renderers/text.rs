use super::{Field, OnChange, ParamRenderer};
use crate::state::Param;
use crate::ui::widgets::{edit_text, TextField};
use crate::ui::{Graphics, InputEvent, Rect};

/// Labeled single-line text input. Emits the full text after every keystroke.
pub struct TextRenderer;

impl ParamRenderer for TextRenderer {
    fn height(&self, _param: &Param) -> u16 {
        TextField::HEIGHT
    }

    fn render(&self, field: &Field<'_>, g: &mut dyn Graphics, area: Rect) {
        TextField {
            label: &field.param.name,
            value: field.value,
            placeholder: field.placeholder,
            focused: field.focused,
        }
        .render(g, area.x, area.y, area.width);
    }

    fn handle_input(&self, field: &Field<'_>, event: &InputEvent, on_change: OnChange<'_>) -> bool {
        match edit_text(field.value, event) {
            Some(text) => {
                on_change(field.param.id, text);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ParamId;
    use crate::ui::{KeyCode, TextCanvas};

    #[test]
    fn test_keystrokes_emit_raw_text() {
        let param = Param::new(2, "Length", "string");
        let field = Field {
            param: &param,
            value: "max",
            focused: true,
            placeholder: "",
        };
        let mut changes = Vec::new();
        let mut record = |id: ParamId, value: String| changes.push((id, value));

        assert!(TextRenderer.handle_input(&field, &InputEvent::char('i'), &mut record));
        assert!(TextRenderer.handle_input(&field, &InputEvent::key(KeyCode::Backspace), &mut record));
        assert!(!TextRenderer.handle_input(&field, &InputEvent::key(KeyCode::Up), &mut record));

        assert_eq!(changes, vec![(2, "maxi".to_string()), (2, "ma".to_string())]);
    }

    #[test]
    fn test_render_seeds_current_value() {
        let param = Param::new(1, "Purpose", "string");
        let field = Field {
            param: &param,
            value: "casual",
            focused: false,
            placeholder: "ignored",
        };
        let mut canvas = TextCanvas::new(20, 2);
        TextRenderer.render(&field, &mut canvas, Rect::new(0, 0, 20, 2));
        assert_eq!(canvas.line(0), "Purpose");
        assert!(canvas.line(1).starts_with("[casual"));
    }
}
