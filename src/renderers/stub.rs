use super::{Field, OnChange, ParamRenderer};
use crate::state::Param;
use crate::ui::{Graphics, InputEvent, Rect};

/// Placeholder for types without an editor yet: draws nothing, takes no focus
pub struct StubRenderer;

impl ParamRenderer for StubRenderer {
    fn height(&self, _param: &Param) -> u16 {
        0
    }

    fn render(&self, _field: &Field<'_>, _g: &mut dyn Graphics, _area: Rect) {}

    fn handle_input(&self, _field: &Field<'_>, _event: &InputEvent, _on_change: OnChange<'_>) -> bool {
        false
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
