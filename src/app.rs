use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::config::EditorSettings;
use crate::error::Result;
use crate::panes::{HelpPane, ParamEditPane};
use crate::renderers::RendererRegistry;
use crate::state::{EditorProps, Fixture, Model, ParamEditor};
use crate::ui::{Action, Frame, Graphics, InputEvent, Keymap, Pane, PaneManager, Viewport};

/// Commands the host page issues to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    GetModel,
    ResetToInitial,
    ResetToEmpty,
    Reload,
    Quit,
}

fn host_keymap() -> Keymap {
    Keymap::new()
        .bind_ctrl('g', "get_model", "Show the current model")
        .bind_ctrl('r', "reset_initial", "Reset to initial values")
        .bind_ctrl('e', "reset_empty", "Reset to empty values")
        .bind_ctrl('o', "reload", "Reload the input file")
        .bind_ctrl('q', "quit", "Quit")
}

fn command_for(action: &str) -> Option<HostCommand> {
    match action {
        "get_model" => Some(HostCommand::GetModel),
        "reset_initial" => Some(HostCommand::ResetToInitial),
        "reset_empty" => Some(HostCommand::ResetToEmpty),
        "reload" => Some(HostCommand::Reload),
        "quit" => Some(HostCommand::Quit),
        _ => None,
    }
}

/// The demo host: owns the panes, the frame chrome and the input source
pub struct App {
    panes: PaneManager,
    frame: Frame,
    keymap: Keymap,
    source: Option<PathBuf>,
    resets: Rc<Cell<u32>>,
}

impl App {
    pub fn new(
        fixture: Fixture,
        source: Option<PathBuf>,
        registry: RendererRegistry,
        settings: EditorSettings,
    ) -> Self {
        let resets = Rc::new(Cell::new(0));
        let counter = Rc::clone(&resets);
        let props = EditorProps::new(fixture.params, fixture.model).with_on_reset(move || {
            counter.set(counter.get() + 1);
            tracing::info!(count = counter.get(), "reset callback fired");
        });

        let mut frame = Frame::new("Product parameter editor");
        frame.source_name = source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "demo".to_string());

        let keymap = host_keymap();
        let edit_pane = ParamEditPane::new(ParamEditor::new(props), registry, settings);
        let help = HelpPane::new(ParamEditPane::ID, &edit_pane.keymap().merged(&keymap));

        let mut panes = PaneManager::new(Box::new(edit_pane));
        panes.add_pane(Box::new(help));

        Self {
            panes,
            frame,
            keymap,
            source,
            resets,
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn active_pane(&self) -> &'static str {
        self.panes.active().id()
    }

    /// Times the editor's reset callback has fired
    pub fn reset_count(&self) -> u32 {
        self.resets.get()
    }

    pub fn edit_pane(&mut self) -> Option<&mut ParamEditPane> {
        self.panes.get_pane_mut::<ParamEditPane>(ParamEditPane::ID)
    }

    pub fn current_model(&mut self) -> Option<Model> {
        self.edit_pane().map(|p| p.editor().get_model())
    }

    /// Route one input event. Returns true when the app should quit.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if let Some(command) = self.keymap.lookup(&event).and_then(command_for) {
            return self.dispatch(command);
        }
        match self.panes.handle_input(event) {
            Action::ValueChanged(param_id, value) => {
                tracing::trace!(param_id, value = %value, "value changed");
            }
            Action::SwitchPane(_) | Action::None => {}
        }
        false
    }

    /// Run a host command. Returns true for `Quit`.
    pub fn dispatch(&mut self, command: HostCommand) -> bool {
        tracing::debug!(?command, "host command");
        match command {
            HostCommand::Quit => return true,
            HostCommand::GetModel => {
                let Some(model) = self.current_model() else {
                    return false;
                };
                match serde_json::to_string(&model) {
                    Ok(json) => {
                        tracing::info!(model = %json, "current model");
                        self.frame.push_message(format!("Current model: {}", json));
                    }
                    Err(e) => tracing::error!("Failed to serialize model: {}", e),
                }
            }
            HostCommand::ResetToInitial => {
                if let Some(pane) = self.edit_pane() {
                    pane.editor_mut().reset_to_initial();
                    let count = self.reset_count();
                    self.frame.push_message(format!(
                        "Model reset to initial values (reset callback fired {} time(s))",
                        count
                    ));
                }
            }
            HostCommand::ResetToEmpty => {
                if let Some(pane) = self.edit_pane() {
                    pane.editor_mut().reset_to_empty();
                    self.frame.push_message("Model reset to empty values");
                }
            }
            HostCommand::Reload => match self.reload() {
                Ok(generation) => self
                    .frame
                    .push_message(format!("Input reloaded (generation {})", generation)),
                Err(e) => {
                    tracing::warn!("Reload failed: {}", e);
                    self.frame.push_message(format!("Reload failed: {}", e));
                }
            },
        }
        false
    }

    /// Re-read the input and hand it to the editor as a new dataset
    fn reload(&mut self) -> Result<u64> {
        let fixture = match &self.source {
            Some(path) => Fixture::from_path(path)?,
            None => Fixture::demo()?,
        };
        let Some(pane) = self.edit_pane() else {
            return Ok(0);
        };
        let editor = pane.editor_mut();
        editor.update(fixture.params.into(), Rc::new(fixture.model));
        Ok(editor.generation())
    }

    pub fn render(&self, g: &mut dyn Graphics) {
        let (width, height) = g.size();
        self.frame.render(g);
        let mut view = Viewport::new(g, Frame::content_area(width, height));
        self.panes.render(&mut view);
    }
}
