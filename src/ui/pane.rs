use std::any::Any;

use super::{Graphics, InputEvent, Keymap};
use crate::state::ParamId;

/// Actions that can be returned from pane input handling
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action taken, continue as normal
    None,
    /// Switch to a different pane by ID
    SwitchPane(&'static str),
    /// A field's value was edited
    ValueChanged(ParamId, String),
}

/// Trait for UI panes (screens/views)
pub trait Pane {
    /// Unique identifier for this pane
    fn id(&self) -> &'static str;

    /// Handle an input event, returning an action
    fn handle_input(&mut self, event: InputEvent) -> Action;

    /// Render the pane to the graphics context
    fn render(&self, g: &mut dyn Graphics);

    /// Get the keymap for this pane (for introspection/help)
    fn keymap(&self) -> &Keymap;

    /// Called when this pane becomes active
    fn on_enter(&mut self) {}

    /// Return self as Any for downcasting (required for type-specific access)
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Owns every pane; exactly one is active
pub struct PaneManager {
    panes: Vec<Box<dyn Pane>>,
    active_index: usize,
}

impl PaneManager {
    /// Create a new pane manager with an initial pane
    pub fn new(initial_pane: Box<dyn Pane>) -> Self {
        Self {
            panes: vec![initial_pane],
            active_index: 0,
        }
    }

    /// Add a pane to the manager (does not make it active)
    pub fn add_pane(&mut self, pane: Box<dyn Pane>) {
        self.panes.push(pane);
    }

    pub fn active(&self) -> &dyn Pane {
        self.panes[self.active_index].as_ref()
    }

    pub fn active_mut(&mut self) -> &mut dyn Pane {
        self.panes[self.active_index].as_mut()
    }

    /// Switch to a pane by ID
    pub fn switch_to(&mut self, id: &str) -> bool {
        match self.panes.iter().position(|p| p.id() == id) {
            Some(index) => {
                if index != self.active_index {
                    self.active_index = index;
                    self.panes[index].on_enter();
                }
                true
            }
            None => {
                tracing::warn!(pane = id, "switch to unknown pane");
                false
            }
        }
    }

    /// Handle input for the active pane, following any pane switch it requests
    pub fn handle_input(&mut self, event: InputEvent) -> Action {
        let action = self.active_mut().handle_input(event);
        if let Action::SwitchPane(id) = &action {
            self.switch_to(id);
        }
        action
    }

    pub fn render(&self, g: &mut dyn Graphics) {
        self.active().render(g);
    }

    /// Get a mutable reference to a pane by ID, downcasted to a specific type
    pub fn get_pane_mut<T: 'static>(&mut self, id: &str) -> Option<&mut T> {
        self.panes
            .iter_mut()
            .find(|p| p.id() == id)
            .and_then(|p| p.as_any_mut().downcast_mut::<T>())
    }
}
