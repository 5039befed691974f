use serde::{Deserialize, Serialize};

/// An egg variable as exposed to the server owner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupVariable {
    pub name: String,
    pub description: String,
    pub env_variable: String,
    pub default_value: String,
    pub server_value: Option<String>,
    pub is_editable: bool,
    /// Laravel validation rules, e.g. `"required|string|max:20"`.
    pub rules: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVariableOptions {
    /// Environment variable name.
    pub key: String,
    pub value: String,
}
