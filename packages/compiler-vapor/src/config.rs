//! Compiler configuration

use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Options shared by the transform and codegen passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    /// Module the vapor runtime helpers (`setClass`, `renderEffect`, ...) are imported from.
    pub runtime_module_name: String,
    /// Module the core helpers (`camelize`, `toHandlerKey`, ...) are imported from.
    pub core_module_name: String,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            runtime_module_name: "vue/vapor".to_string(),
            core_module_name: "vue".to_string(),
        }
    }
}

impl CompilerOptions {
    /// Parse options from a JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
