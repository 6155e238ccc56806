use super::{Field, OnChange, ParamRenderer};
use crate::state::Param;
use crate::ui::widgets::{cycle_option, ChoiceField};
use crate::ui::{Graphics, InputEvent, Rect};

/// Picks one of `param.options` with Left/Right/Home/End
pub struct ChoiceRenderer;

impl ParamRenderer for ChoiceRenderer {
    fn height(&self, _param: &Param) -> u16 {
        ChoiceField::HEIGHT
    }

    fn render(&self, field: &Field<'_>, g: &mut dyn Graphics, area: Rect) {
        ChoiceField {
            label: &field.param.name,
            options: field.param.options(),
            value: field.value,
            focused: field.focused,
        }
        .render(g, area.x, area.y, area.width);
    }

    fn handle_input(&self, field: &Field<'_>, event: &InputEvent, on_change: OnChange<'_>) -> bool {
        match cycle_option(field.param.options(), field.value, event) {
            Some(choice) => {
                on_change(field.param.id, choice);
                true
            }
            None => false,
        }
    }
}
