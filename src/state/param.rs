use serde::{Deserialize, Serialize};

pub type ParamId = u32;

/// Declared type of a parameter. Selects the renderer and the empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    String,
    Number,
    Other(String),
}

impl ParamType {
    pub fn as_str(&self) -> &str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Other(tag) => tag,
        }
    }

    /// Value a parameter of this type holds when nothing else is known
    pub fn default_value(&self) -> &'static str {
        match self {
            ParamType::String => "",
            ParamType::Number => "0",
            ParamType::Other(_) => "",
        }
    }
}

impl From<&str> for ParamType {
    fn from(tag: &str) -> Self {
        match tag {
            "string" => ParamType::String,
            "number" => ParamType::Number,
            other => ParamType::Other(other.to_string()),
        }
    }
}

impl From<String> for ParamType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "string" => ParamType::String,
            "number" => ParamType::Number,
            _ => ParamType::Other(tag),
        }
    }
}

impl From<ParamType> for String {
    fn from(ty: ParamType) -> Self {
        match ty {
            ParamType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// Schema entry for one editable product attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Param {
    pub fn new(id: ParamId, name: &str, param_type: impl Into<ParamType>) -> Self {
        Self {
            id,
            name: name.to_string(),
            param_type: param_type.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }

    /// Stable locator of this parameter's input, e.g. `param-3`
    pub fn field_id(&self) -> String {
        format!("param-{}", self.id)
    }

    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamValue {
    pub param_id: ParamId,
    pub value: String,
}

impl ParamValue {
    pub fn new(param_id: ParamId, value: &str) -> Self {
        Self {
            param_id,
            value: value.to_string(),
        }
    }
}
