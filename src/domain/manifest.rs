use serde::{Deserialize, Serialize};

use super::{AppError, Implementation, Namespace, Permissions};

/// File name of the generated manifest at the project root.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Identity and declared capabilities of a generated Managed Component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub namespace: Namespace,
    pub description: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<Implementation>,
    #[serde(default)]
    pub permissions: Permissions,
}

impl Manifest {
    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String, AppError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }
}
