use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::param::{Param, ParamId, ParamValue};
use crate::error::{Error, Result};

const DEMO_FIXTURE: &str = include_str!("../../data/demo.json");

/// Reference color carried alongside the parameter values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    pub id: u32,
    pub name: String,
}

impl ProductColor {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// Bundle exchanged with the host: edited values plus pass-through reference data.
///
/// The value list is shared so an editor can tell a new dataset (a new list)
/// from a refresh of the reference data alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Model {
    pub param_values: Rc<[ParamValue]>,
    pub colors: Vec<ProductColor>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl Model {
    pub fn new(param_values: Vec<ParamValue>, colors: Vec<ProductColor>) -> Self {
        Self {
            param_values: param_values.into(),
            colors,
        }
    }

    /// Same value list, new reference data
    pub fn with_colors(&self, colors: Vec<ProductColor>) -> Self {
        Self {
            param_values: Rc::clone(&self.param_values),
            colors,
        }
    }

    /// First non-empty value supplied for `param_id`
    pub fn value_for(&self, param_id: ParamId) -> Option<&str> {
        self.param_values
            .iter()
            .find(|pv| pv.param_id == param_id)
            .map(|pv| pv.value.as_str())
            .filter(|v| !v.is_empty())
    }
}

/// Host input document: a schema and the model to edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub params: Vec<Param>,
    #[serde(default)]
    pub model: Model,
}

impl Fixture {
    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO_FIXTURE)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }
}
