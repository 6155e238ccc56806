use std::collections::HashSet;
use std::rc::Rc;

use super::model::Model;
use super::param::{Param, ParamId, ParamValue};

/// Called once after every `reset_to_initial`
pub type ResetCallback = Box<dyn FnMut()>;

/// What the host hands to the editor
pub struct EditorProps {
    pub params: Rc<[Param]>,
    pub model: Rc<Model>,
    pub on_reset: Option<ResetCallback>,
}

impl EditorProps {
    pub fn new(params: Vec<Param>, model: Model) -> Self {
        Self {
            params: params.into(),
            model: Rc::new(model),
            on_reset: None,
        }
    }

    pub fn with_on_reset(mut self, on_reset: impl FnMut() + 'static) -> Self {
        self.on_reset = Some(Box::new(on_reset));
        self
    }
}

/// Edit state for one product's parameters.
///
/// The value list is derived from the host's schema and model. It is rebuilt
/// from scratch whenever the host supplies a schema or a model value list with
/// a new identity (`Rc` pointer), which discards unsaved edits. A model that
/// only carries new colors is adopted without touching the values. Between
/// re-synchronizations only `edit` and the two resets change them.
pub struct ParamEditor {
    params: Rc<[Param]>,
    model: Rc<Model>,
    /// One entry per distinct param id, in schema order
    values: Vec<ParamValue>,
    on_reset: Option<ResetCallback>,
    generation: u64,
}

impl ParamEditor {
    pub fn new(props: EditorProps) -> Self {
        let values = initial_values(&props.params, &props.model);
        tracing::debug!(params = values.len(), "param editor initialized");
        Self {
            params: props.params,
            model: props.model,
            values,
            on_reset: props.on_reset,
            generation: 0,
        }
    }

    /// Supply a (possibly) new schema and model.
    ///
    /// Returns true if the schema or the model's value list changed identity
    /// and the values were rebuilt.
    pub fn update(&mut self, params: Rc<[Param]>, model: Rc<Model>) -> bool {
        let changed = !Rc::ptr_eq(&self.params, &params)
            || !Rc::ptr_eq(&self.model.param_values, &model.param_values);
        self.params = params;
        self.model = model;
        if changed {
            self.resync();
        }
        changed
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Shared handle to the current schema
    pub fn params_rc(&self) -> Rc<[Param]> {
        Rc::clone(&self.params)
    }

    /// Shared handle to the model last supplied by the host
    pub fn model_rc(&self) -> Rc<Model> {
        Rc::clone(&self.model)
    }

    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    pub fn value(&self, param_id: ParamId) -> Option<&str> {
        self.values
            .iter()
            .find(|pv| pv.param_id == param_id)
            .map(|pv| pv.value.as_str())
    }

    /// Number of re-synchronizations since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Set the value of one parameter. Unknown ids are ignored.
    pub fn edit(&mut self, param_id: ParamId, value: impl Into<String>) -> bool {
        match self.values.iter_mut().find(|pv| pv.param_id == param_id) {
            Some(entry) => {
                entry.value = value.into();
                tracing::debug!(param_id, value = %entry.value, "param edited");
                true
            }
            None => {
                tracing::debug!(param_id, "edit ignored, no such param");
                false
            }
        }
    }

    /// Owned snapshot of the current values and the host's colors
    pub fn get_model(&self) -> Model {
        Model {
            param_values: self.values.as_slice().into(),
            colors: self.model.colors.clone(),
        }
    }

    pub fn reset_to_initial(&mut self) {
        self.values = initial_values(&self.params, &self.model);
        tracing::info!(params = self.values.len(), "reset to initial values");
        if let Some(on_reset) = self.on_reset.as_mut() {
            on_reset();
        }
    }

    pub fn reset_to_empty(&mut self) {
        for entry in &mut self.values {
            let default = self
                .params
                .iter()
                .find(|p| p.id == entry.param_id)
                .map(|p| p.param_type.default_value())
                .unwrap_or_default();
            entry.value = default.to_string();
        }
        tracing::info!(params = self.values.len(), "reset to empty values");
    }

    fn resync(&mut self) {
        self.values = initial_values(&self.params, &self.model);
        self.generation += 1;
        tracing::info!(
            generation = self.generation,
            params = self.values.len(),
            "param values re-synchronized"
        );
    }
}

/// Build the value list for `params`: the model's value where it has a
/// non-empty one, otherwise the type default.
fn initial_values(params: &[Param], model: &Model) -> Vec<ParamValue> {
    let mut seen = HashSet::with_capacity(params.len());
    params
        .iter()
        .filter(|param| {
            let first = seen.insert(param.id);
            if !first {
                tracing::warn!(param_id = param.id, "duplicate param id in schema");
            }
            first
        })
        .map(|param| {
            let value = model
                .value_for(param.id)
                .unwrap_or_else(|| param.param_type.default_value());
            ParamValue::new(param.id, value)
        })
        .collect()
}
