use std::any::Any;

use crate::config::EditorSettings;
use crate::renderers::{Field, RendererRegistry};
use crate::state::{Param, ParamEditor, ParamId};
use crate::ui::style::field;
use crate::ui::{Action, Color, Graphics, InputEvent, KeyCode, Keymap, Pane, Rect, Style};

/// Where one parameter's field sits on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    /// `param-{id}`
    pub field_id: String,
    pub param_id: ParamId,
    pub rect: Rect,
}

/// Rows inside the box that are not fields: top/bottom border, top padding,
/// the gap above the hint line and the hint line itself.
const CHROME_ROWS: u16 = 5;
const FIELD_GAP: u16 = 1;

/// Form listing every parameter of the schema, one field per parameter
pub struct ParamEditPane {
    keymap: Keymap,
    editor: ParamEditor,
    registry: RendererRegistry,
    settings: EditorSettings,
    focused: Option<ParamId>,
}

impl ParamEditPane {
    pub const ID: &'static str = "params";

    pub fn new(editor: ParamEditor, registry: RendererRegistry, settings: EditorSettings) -> Self {
        Self {
            keymap: Keymap::new()
                .bind_key(KeyCode::Tab, "next", "Next field")
                .bind_key(KeyCode::Down, "next", "Next field")
                .bind_key(KeyCode::BackTab, "prev", "Previous field")
                .bind_key(KeyCode::Up, "prev", "Previous field")
                .bind_key(KeyCode::F(1), "help", "Show key bindings"),
            editor,
            registry,
            settings,
            focused: None,
        }
    }

    pub fn editor(&self) -> &ParamEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ParamEditor {
        &mut self.editor
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    fn is_interactive(&self, param: &Param) -> bool {
        self.registry
            .resolve(param.param_type.as_str())
            .is_interactive()
    }

    /// Schema index of the focused field. Falls back to the first interactive
    /// field when the remembered one is gone (e.g. after re-synchronization).
    fn focused_index(&self) -> Option<usize> {
        let params = self.editor.params();
        self.focused
            .and_then(|id| params.iter().position(|p| p.id == id))
            .filter(|&i| self.is_interactive(&params[i]))
            .or_else(|| params.iter().position(|p| self.is_interactive(p)))
    }

    pub fn focused_param(&self) -> Option<ParamId> {
        self.focused_index().map(|i| self.editor.params()[i].id)
    }

    /// Move focus to `param_id`. Fails for unknown or non-interactive params.
    pub fn focus(&mut self, param_id: ParamId) -> bool {
        let target = self
            .editor
            .params()
            .iter()
            .find(|p| p.id == param_id)
            .filter(|p| self.is_interactive(p))
            .map(|p| p.id);
        if target.is_some() {
            self.focused = target;
        }
        target.is_some()
    }

    fn move_focus(&mut self, forward: bool) {
        let params = self.editor.params();
        let interactive: Vec<usize> = (0..params.len())
            .filter(|&i| self.is_interactive(&params[i]))
            .collect();
        if interactive.is_empty() {
            return;
        }
        let current = self
            .focused_index()
            .and_then(|i| interactive.iter().position(|&j| j == i))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % interactive.len()
        } else {
            (current + interactive.len() - 1) % interactive.len()
        };
        self.focused = Some(params[interactive[next]].id);
    }

    /// Outer box for a drawing surface of `width` x `height`
    fn box_rect(&self, width: u16, height: u16) -> Rect {
        let content: u32 = if self.editor.params().is_empty() {
            1
        } else {
            self.editor
                .params()
                .iter()
                .map(|p| self.registry.resolve(p.param_type.as_str()).height(p))
                .filter(|h| *h > 0)
                .map(|h| u32::from(h) + u32::from(FIELD_GAP))
                .sum::<u32>()
                .saturating_sub(u32::from(FIELD_GAP))
        };
        let wanted = content.saturating_add(u32::from(CHROME_ROWS));
        let rows = wanted.min(u32::from(height)) as u16;
        Rect::centered_x(width, 0, self.settings.width, rows)
    }

    /// Rows available for fields inside `outer`
    fn field_area(outer: Rect) -> Rect {
        Rect::new(
            outer.x + 2,
            outer.y + 2,
            outer.width.saturating_sub(4),
            outer.height.saturating_sub(CHROME_ROWS),
        )
    }

    /// Layout of every visible field on a `width` x `height` surface.
    ///
    /// Fields are stacked in schema order; when they do not all fit, the list
    /// scrolls so the focused field stays visible. Fields that render nothing
    /// get no slot.
    pub fn field_layout(&self, width: u16, height: u16) -> Vec<FieldSlot> {
        let area = Self::field_area(self.box_rect(width, height));
        let focused = self.focused_param();

        // Offsets are u32: a long schema stacks past u16::MAX rows
        let mut offset = 0u32;
        let mut slots = Vec::new();
        let mut focus_bottom = 0u32;
        for param in self.editor.params() {
            let h = self.registry.resolve(param.param_type.as_str()).height(param);
            if h == 0 {
                continue;
            }
            if Some(param.id) == focused {
                focus_bottom = offset + u32::from(h);
            }
            slots.push((param, offset, h));
            offset += u32::from(h) + u32::from(FIELD_GAP);
        }

        let visible = u32::from(area.height);
        let scroll = focus_bottom.saturating_sub(visible);
        slots
            .into_iter()
            .filter(|(_, top, h)| *top >= scroll && top + u32::from(*h) - scroll <= visible)
            .map(|(param, top, h)| FieldSlot {
                field_id: param.field_id(),
                param_id: param.id,
                rect: Rect::new(area.x, area.y + (top - scroll) as u16, area.width, h),
            })
            .collect()
    }

    /// Slot of the field with identifier `field_id`, if visible
    pub fn locate(&self, field_id: &str, width: u16, height: u16) -> Option<FieldSlot> {
        self.field_layout(width, height)
            .into_iter()
            .find(|slot| slot.field_id == field_id)
    }

    fn edit_focused(&mut self, event: &InputEvent) -> Action {
        let Some(index) = self.focused_index() else {
            return Action::None;
        };
        let params = self.editor.params_rc();
        let param = &params[index];
        let renderer = self.registry.resolve(param.param_type.as_str());
        let value = self.editor.value(param.id).unwrap_or_default().to_string();
        let placeholder = self.settings.placeholder_for(&param.name);
        let field = Field {
            param,
            value: &value,
            focused: true,
            placeholder: &placeholder,
        };

        let mut changes = Vec::new();
        renderer.handle_input(&field, event, &mut |id: ParamId, value: String| {
            changes.push((id, value))
        });

        let mut action = Action::None;
        for (id, value) in changes {
            if self.editor.edit(id, value.clone()) {
                action = Action::ValueChanged(id, value);
            }
        }
        action
    }
}

impl Pane for ParamEditPane {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn handle_input(&mut self, event: InputEvent) -> Action {
        match self.keymap.lookup(&event) {
            Some("next") => {
                self.move_focus(true);
                Action::None
            }
            Some("prev") => {
                self.move_focus(false);
                Action::None
            }
            Some("help") => Action::SwitchPane("help"),
            _ => self.edit_focused(&event),
        }
    }

    fn render(&self, g: &mut dyn Graphics) {
        let (width, height) = g.size();
        let outer = self.box_rect(width, height);

        g.set_style(Style::new().fg(Color::ORANGE));
        let title = format!(" {} ", self.settings.title);
        g.draw_box(outer, Some(&title));

        let area = Self::field_area(outer);
        if self.editor.params().is_empty() {
            let msg = &self.settings.empty_message;
            let x = area.x + area.width.saturating_sub(msg.chars().count() as u16) / 2;
            g.set_style(field::PLACEHOLDER);
            g.put_str(x, area.y, msg);
        } else {
            let focused = self.focused_param();
            for slot in self.field_layout(width, height) {
                let Some(param) = self.editor.params().iter().find(|p| p.id == slot.param_id)
                else {
                    continue;
                };
                let is_focused = focused == Some(param.id);
                let placeholder = self.settings.placeholder_for(&param.name);
                let field = Field {
                    param,
                    value: self.editor.value(param.id).unwrap_or_default(),
                    focused: is_focused,
                    placeholder: &placeholder,
                };
                if is_focused {
                    g.set_style(Style::new().fg(Color::ORANGE).bold());
                    g.put_char(outer.x + 1, slot.rect.y, '>');
                }
                self.registry
                    .resolve(param.param_type.as_str())
                    .render(&field, g, slot.rect);
            }
        }

        let hint_y = outer.bottom().saturating_sub(2);
        g.set_style(Style::new().fg(Color::DARK_GRAY));
        g.put_str(area.x, hint_y, "Tab/Down: next | Up: previous | F1: help");
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EditorProps, Model, ParamValue};
    use crate::ui::TextCanvas;

    fn pane(params: Vec<Param>, values: Vec<ParamValue>) -> ParamEditPane {
        let editor = ParamEditor::new(EditorProps::new(params, Model::new(values, vec![])));
        ParamEditPane::new(editor, RendererRegistry::new(), EditorSettings::default())
    }

    fn dress() -> ParamEditPane {
        pane(
            vec![
                Param::new(1, "Purpose", "string"),
                Param::new(2, "Count", "number"),
                Param::new(3, "Size", "select").with_options(&["S", "M", "L"]),
            ],
            vec![ParamValue::new(1, "casual"), ParamValue::new(3, "M")],
        )
    }

    #[test]
    fn test_focus_skips_stub_fields() {
        let mut pane = dress();
        assert_eq!(pane.focused_param(), Some(1));
        pane.handle_input(InputEvent::key(KeyCode::Tab));
        assert_eq!(pane.focused_param(), Some(3));
        pane.handle_input(InputEvent::key(KeyCode::Down));
        assert_eq!(pane.focused_param(), Some(1));
        pane.handle_input(InputEvent::key(KeyCode::Up));
        assert_eq!(pane.focused_param(), Some(3));
        assert!(!pane.focus(2));
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut pane = dress();
        let action = pane.handle_input(InputEvent::char('!'));
        assert_eq!(action, Action::ValueChanged(1, "casual!".to_string()));
        assert_eq!(pane.editor().value(1), Some("casual!"));
    }

    #[test]
    fn test_select_field_cycles() {
        let mut pane = dress();
        assert!(pane.focus(3));
        pane.handle_input(InputEvent::key(KeyCode::Right));
        assert_eq!(pane.editor().value(3), Some("L"));
    }

    #[test]
    fn test_help_key_requests_help_pane() {
        let mut pane = dress();
        assert_eq!(
            pane.handle_input(InputEvent::key(KeyCode::F(1))),
            Action::SwitchPane("help")
        );
    }

    #[test]
    fn test_layout_has_slot_per_drawn_field() {
        let pane = dress();
        let slots = pane.field_layout(80, 30);
        let ids: Vec<&str> = slots.iter().map(|s| s.field_id.as_str()).collect();
        assert_eq!(ids, vec!["param-1", "param-3"]);
        assert_eq!(slots[0].rect.height, 2);
        assert_eq!(slots[1].rect.y, slots[0].rect.y + 3);
    }

    #[test]
    fn test_layout_scrolls_to_focus() {
        let params: Vec<Param> = (1..=10)
            .map(|i| Param::new(i, &format!("P{}", i), "string"))
            .collect();
        let mut pane = pane(params, vec![]);
        assert!(pane.focus(10));
        let slots = pane.field_layout(80, 14);
        assert_eq!(slots.last().map(|s| s.param_id), Some(10));
        assert!(slots.iter().all(|s| s.param_id != 1));
    }

    #[test]
    fn test_long_schema_fills_surface() {
        let params: Vec<Param> = (1..=22_000)
            .map(|i| Param::new(i, &format!("P{}", i), "string"))
            .collect();
        let mut pane = pane(params, vec![]);
        let mut canvas = TextCanvas::new(80, 24);
        pane.render(&mut canvas);
        assert!(canvas.contains("Product parameters"));
        assert_eq!(pane.field_layout(80, 24).first().map(|s| s.param_id), Some(1));

        assert!(pane.focus(22_000));
        let slots = pane.field_layout(80, 24);
        let last = slots.last().unwrap();
        assert_eq!(last.param_id, 22_000);
        assert!(last.rect.bottom() <= 24);
    }

    #[test]
    fn test_render_empty_schema() {
        let pane = pane(vec![], vec![]);
        let mut canvas = TextCanvas::new(80, 10);
        pane.render(&mut canvas);
        assert!(canvas.contains("No parameters to display"));
        assert!(pane.field_layout(80, 10).is_empty());
    }

    #[test]
    fn test_render_shows_values_and_placeholders() {
        let pane = pane(
            vec![
                Param::new(1, "Purpose", "string"),
                Param::new(2, "Length", "string"),
            ],
            vec![ParamValue::new(1, "casual")],
        );
        let mut canvas = TextCanvas::new(80, 20);
        pane.render(&mut canvas);

        assert!(canvas.contains("Product parameters"));
        let slot = pane.locate("param-2", 80, 20).unwrap();
        let lines = canvas.region(slot.rect);
        assert_eq!(lines[0], "Length");
        assert!(lines[1].starts_with("[Enter a value for Length"));

        let first = pane.locate("param-1", 80, 20).unwrap();
        assert!(canvas.region(first.rect)[1].starts_with("[casual"));
    }
}
