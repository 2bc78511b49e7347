use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DocumentFormat;

/// A generated design document covering one module.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DesignDocument {
    pub id: String,
    /// Id of the module this document belongs to.
    pub module_id: String,
    pub format: DocumentFormat,
    #[serde(default)]
    pub title: String,
}
