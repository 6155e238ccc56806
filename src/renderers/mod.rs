//! Per-type field renderers and the registry that maps a parameter's declared
//! type tag to one of them.

mod choice;
mod stub;
mod text;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub use choice::ChoiceRenderer;
pub use stub::StubRenderer;
pub use text::TextRenderer;

use crate::state::{Param, ParamId};
use crate::ui::{Graphics, InputEvent, Rect};

/// Type tag every unknown type falls back to
pub const FALLBACK_TYPE: &str = "string";

/// Receives `(param_id, new_value)` for every edit a renderer makes
pub type OnChange<'a> = &'a mut dyn FnMut(ParamId, String);

/// Everything a renderer may look at for one parameter
pub struct Field<'a> {
    pub param: &'a Param,
    pub value: &'a str,
    pub focused: bool,
    pub placeholder: &'a str,
}

/// Presents and edits the value of one parameter type.
///
/// Renderers are shared between all fields of a type, so they hold no
/// per-field state: everything comes in through [`Field`].
pub trait ParamRenderer {
    /// Rows the field occupies. Zero means the field is not drawn.
    fn height(&self, param: &Param) -> u16;

    fn render(&self, field: &Field<'_>, g: &mut dyn Graphics, area: Rect);

    /// Handle a key while the field has focus. Returns true if consumed.
    fn handle_input(&self, field: &Field<'_>, event: &InputEvent, on_change: OnChange<'_>) -> bool;

    /// Whether the field can take keyboard focus
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Shared table of renderers keyed by type tag.
///
/// Clones are handles onto the same table: a registration through one handle
/// is seen by every editor holding another.
#[derive(Clone)]
pub struct RendererRegistry {
    renderers: Rc<RefCell<HashMap<String, Rc<dyn ParamRenderer>>>>,
}

impl RendererRegistry {
    /// Registry with the built-in `string`, `number` and `select` renderers
    pub fn new() -> Self {
        let registry = Self {
            renderers: Rc::new(RefCell::new(HashMap::new())),
        };
        registry.register(FALLBACK_TYPE, TextRenderer);
        registry.register("number", StubRenderer);
        registry.register("select", ChoiceRenderer);
        registry
    }

    /// Install or replace the renderer for `type_tag`
    pub fn register(&self, type_tag: impl Into<String>, renderer: impl ParamRenderer + 'static) {
        let type_tag = type_tag.into();
        let replaced = self
            .renderers
            .borrow_mut()
            .insert(type_tag.clone(), Rc::new(renderer))
            .is_some();
        tracing::debug!(type_tag = %type_tag, replaced, "renderer registered");
    }

    /// Renderer for `type_tag`, or the `string` renderer if none is registered
    pub fn resolve(&self, type_tag: &str) -> Rc<dyn ParamRenderer> {
        let renderers = self.renderers.borrow();
        let found = renderers
            .get(type_tag)
            .or_else(|| renderers.get(FALLBACK_TYPE))
            .cloned();
        found.unwrap_or_else(|| Rc::new(TextRenderer) as Rc<dyn ParamRenderer>)
    }

    pub fn is_registered(&self, type_tag: &str) -> bool {
        self.renderers.borrow().contains_key(type_tag)
    }

    /// Installed type tags, sorted
    pub fn registered_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.renderers.borrow().keys().cloned().collect();
        types.sort();
        types
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::TextCanvas;

    struct Marker(&'static str);

    impl ParamRenderer for Marker {
        fn height(&self, _param: &Param) -> u16 {
            1
        }

        fn render(&self, _field: &Field<'_>, g: &mut dyn Graphics, area: Rect) {
            g.put_str(area.x, area.y, self.0);
        }

        fn handle_input(&self, _: &Field<'_>, _: &InputEvent, _: OnChange<'_>) -> bool {
            false
        }
    }

    fn draw(renderer: &Rc<dyn ParamRenderer>) -> String {
        let param = Param::new(1, "Purpose", "string");
        let field = Field {
            param: &param,
            value: "",
            focused: false,
            placeholder: "",
        };
        let mut canvas = TextCanvas::new(20, 2);
        renderer.render(&field, &mut canvas, Rect::new(0, 0, 20, 2));
        canvas.line(0)
    }

    #[test]
    fn test_builtins_present() {
        let registry = RendererRegistry::new();
        assert_eq!(registry.registered_types(), vec!["number", "select", "string"]);
        assert!(!registry.resolve("number").is_interactive());
        assert!(registry.resolve("string").is_interactive());
    }

    #[test]
    fn test_unknown_type_falls_back_to_string() {
        let registry = RendererRegistry::new();
        registry.register(FALLBACK_TYPE, Marker("text"));
        assert_eq!(draw(&registry.resolve("color")), "text");
    }

    #[test]
    fn test_register_overwrites_and_is_shared() {
        let registry = RendererRegistry::new();
        let other_handle = registry.clone();

        registry.register("color", Marker("first"));
        other_handle.register("color", Marker("second"));

        assert_eq!(draw(&registry.resolve("color")), "second");
        assert!(registry.is_registered("color"));
        assert!(!RendererRegistry::new().is_registered("color"));
    }
}
