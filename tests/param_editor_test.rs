use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use paramedit::config::EditorSettings;
use paramedit::panes::ParamEditPane;
use paramedit::renderers::{Field, OnChange, ParamRenderer, RendererRegistry};
use paramedit::state::{EditorProps, Model, Param, ParamEditor, ParamValue, ProductColor};
use paramedit::ui::{Action, Graphics, InputEvent, KeyCode, Pane, Rect, TextCanvas};

fn dress_params() -> Vec<Param> {
    vec![
        Param::new(1, "Purpose", "string"),
        Param::new(2, "Length", "string"),
        Param::new(3, "Color", "string"),
        Param::new(4, "Size", "string"),
    ]
}

fn dress_model() -> Model {
    Model::new(
        vec![
            ParamValue::new(1, "casual"),
            ParamValue::new(2, "maxi"),
            ParamValue::new(3, "5"),
            ParamValue::new(4, "Red"),
        ],
        vec![ProductColor::new(1, "Red"), ProductColor::new(2, "Blue")],
    )
}

fn pane_for(params: Vec<Param>, model: Model, registry: RendererRegistry) -> ParamEditPane {
    let editor = ParamEditor::new(EditorProps::new(params, model));
    ParamEditPane::new(editor, registry, EditorSettings::default())
}

fn rendered(pane: &ParamEditPane) -> TextCanvas {
    let mut canvas = TextCanvas::new(80, 40);
    pane.render(&mut canvas);
    canvas
}

#[test]
fn test_renders_every_param_label() {
    let pane = pane_for(dress_params(), dress_model(), RendererRegistry::new());
    let canvas = rendered(&pane);
    for name in ["Purpose", "Length", "Color", "Size"] {
        assert!(canvas.contains(name), "missing label {}\n{}", name, canvas.to_text());
    }
}

#[test]
fn test_fields_show_initial_values() {
    let pane = pane_for(dress_params(), dress_model(), RendererRegistry::new());
    let canvas = rendered(&pane);
    for (field_id, value) in [("param-1", "casual"), ("param-2", "maxi"), ("param-3", "5"), ("param-4", "Red")] {
        let slot = pane.locate(field_id, 80, 40).unwrap();
        let input_row = &canvas.region(slot.rect)[1];
        assert!(
            input_row.starts_with(&format!("[{}", value)),
            "{} shows {:?}",
            field_id,
            input_row
        );
    }
}

#[test]
fn test_get_model_structure() {
    let pane = pane_for(dress_params(), dress_model(), RendererRegistry::new());
    let model = pane.editor().get_model();
    assert_eq!(model, dress_model());
}

#[test]
fn test_typing_updates_field() {
    let mut pane = pane_for(dress_params(), dress_model(), RendererRegistry::new());
    for _ in 0.."casual".len() {
        pane.handle_input(InputEvent::key(KeyCode::Backspace));
    }
    for ch in "office".chars() {
        pane.handle_input(InputEvent::char(ch));
    }

    assert_eq!(pane.editor().value(1), Some("office"));
    let canvas = rendered(&pane);
    let slot = pane.locate("param-1", 80, 40).unwrap();
    assert!(canvas.region(slot.rect)[1].starts_with("[office"));
}

#[test]
fn test_reset_callback_fires_once() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut editor = ParamEditor::new(
        EditorProps::new(dress_params(), dress_model())
            .with_on_reset(move || counter.set(counter.get() + 1)),
    );
    editor.reset_to_initial();
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_empty_params_show_placeholder() {
    let pane = pane_for(Vec::new(), Model::default(), RendererRegistry::new());
    let canvas = rendered(&pane);
    assert!(canvas.contains("No parameters to display"));
    assert!(!canvas.contains("["));
    assert!(pane.editor().get_model().param_values.is_empty());
}

#[test]
fn test_param_without_initial_value_is_empty() {
    let mut params = dress_params();
    params.push(Param::new(5, "New parameter", "string"));
    let pane = pane_for(params, dress_model(), RendererRegistry::new());

    assert_eq!(pane.editor().value(5), Some(""));
    let canvas = rendered(&pane);
    let slot = pane.locate("param-5", 80, 40).unwrap();
    assert!(canvas.region(slot.rect)[1].starts_with("[Enter a value for New parameter"));
}

#[test]
fn test_edit_reset_walkthrough() {
    let resets = Rc::new(Cell::new(0));
    let counter = Rc::clone(&resets);
    let mut editor = ParamEditor::new(
        EditorProps::new(
            vec![
                Param::new(1, "Purpose", "string"),
                Param::new(2, "Length", "string"),
            ],
            Model::new(vec![ParamValue::new(1, "casual")], vec![]),
        )
        .with_on_reset(move || counter.set(counter.get() + 1)),
    );

    let values = |editor: &ParamEditor| editor.get_model().param_values.to_vec();

    assert_eq!(values(&editor), vec![ParamValue::new(1, "casual"), ParamValue::new(2, "")]);
    editor.edit(2, "maxi");
    assert_eq!(values(&editor), vec![ParamValue::new(1, "casual"), ParamValue::new(2, "maxi")]);
    editor.reset_to_empty();
    assert_eq!(values(&editor), vec![ParamValue::new(1, ""), ParamValue::new(2, "")]);
    editor.reset_to_initial();
    assert_eq!(values(&editor), vec![ParamValue::new(1, "casual"), ParamValue::new(2, "")]);
    assert_eq!(resets.get(), 1);
}

/// Draws the value as a row of stars, one per unit
struct StarRenderer;

impl ParamRenderer for StarRenderer {
    fn height(&self, _param: &Param) -> u16 {
        1
    }

    fn render(&self, field: &Field<'_>, g: &mut dyn Graphics, area: Rect) {
        let stars = field.value.parse::<usize>().unwrap_or(0);
        g.put_str(area.x, area.y, &format!("{}: {}", field.param.name, "*".repeat(stars)));
    }

    fn handle_input(&self, field: &Field<'_>, event: &InputEvent, on_change: OnChange<'_>) -> bool {
        if event.key != KeyCode::Right {
            return false;
        }
        let stars = field.value.parse::<usize>().unwrap_or(0);
        on_change(field.param.id, (stars + 1).to_string());
        true
    }
}

#[test]
fn test_custom_renderer_plugs_in() {
    let registry = RendererRegistry::new();
    registry.register("rating", StarRenderer);

    let params = vec![Param::new(8, "Quality", "rating")];
    let model = Model::new(vec![ParamValue::new(8, "2")], vec![]);
    let mut pane = pane_for(params, model, registry.clone());

    assert_eq!(
        pane.handle_input(InputEvent::key(KeyCode::Right)),
        Action::ValueChanged(8, "3".to_string())
    );
    assert!(rendered(&pane).contains("Quality: ***"));
}

#[test]
fn test_unknown_type_renders_as_text() {
    let params = vec![Param::new(6, "Fabric", "material")];
    let model = Model::new(vec![ParamValue::new(6, "silk")], vec![]);
    let pane = pane_for(params, model, RendererRegistry::new());

    let canvas = rendered(&pane);
    let slot = pane.locate("param-6", 80, 40).unwrap();
    assert_eq!(canvas.region(slot.rect)[0], "Fabric");
    assert!(canvas.region(slot.rect)[1].starts_with("[silk"));
}

#[test]
fn test_number_stub_keeps_its_value_without_a_field() {
    let params = vec![
        Param::new(1, "Purpose", "string"),
        Param::new(2, "Count", "number"),
    ];
    let pane = pane_for(params, Model::default(), RendererRegistry::new());

    assert!(pane.locate("param-2", 80, 40).is_none());
    assert_eq!(pane.editor().value(2), Some("0"));
}

#[test]
fn test_new_colors_keep_pending_edits() {
    let mut pane = pane_for(dress_params(), dress_model(), RendererRegistry::new());
    pane.handle_input(InputEvent::char('!'));

    let editor = pane.editor_mut();
    let recolored = editor.model_rc().with_colors(vec![ProductColor::new(3, "Green")]);
    assert!(!editor.update(editor.params_rc(), Rc::new(recolored)));

    let model = pane.editor().get_model();
    assert_eq!(model.param_values[0], ParamValue::new(1, "casual!"));
    assert_eq!(model.colors, vec![ProductColor::new(3, "Green")]);
}

#[test]
fn test_resync_discards_pending_edits() {
    let mut pane = pane_for(dress_params(), dress_model(), RendererRegistry::new());
    pane.handle_input(InputEvent::char('!'));
    assert_eq!(pane.editor().value(1), Some("casual!"));

    let params: Rc<[Param]> = vec![Param::new(1, "Purpose", "string")].into();
    let model = Rc::new(Model::new(vec![ParamValue::new(1, "evening")], vec![]));
    assert!(pane.editor_mut().update(params, model));

    assert_eq!(pane.editor().get_model().param_values.to_vec(), vec![ParamValue::new(1, "evening")]);
    assert_eq!(pane.field_layout(80, 40).len(), 1);
    pane.handle_input(InputEvent::char('s'));
    assert_eq!(pane.editor().value(1), Some("evenings"));
}
