//! Central schema registry for all Gapcheck types.
//!
//! The `SchemaRegistry` builds JSON Schemas from gap-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of the JSON Schemas the engine reads and writes.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Returns early from the caller if conversion fails.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        insert_schema(&mut $map, $name, serde_json::to_value(schema_for!($ty)))?;
    };
}

fn insert_schema(
    schemas: &mut HashMap<&'static str, serde_json::Value>,
    name: &'static str,
    schema: serde_json::Result<serde_json::Value>,
) -> Result<(), SchemaError> {
    let schema = schema.map_err(|e| SchemaError::Generation(format!("{name}: {e}")))?;
    schemas.insert(name, schema);
    Ok(())
}

impl SchemaRegistry {
    /// Build a new registry containing snapshot, entity, and view schemas.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if a generated schema cannot be
    /// converted to JSON.
    pub fn new() -> Result<Self, SchemaError> {
        let mut schemas = HashMap::new();

        // --- Snapshot input (1) ---
        register!(
            schemas,
            "project_snapshot",
            gap_core::entities::ProjectSnapshot
        );

        // --- Engine output (2) ---
        register!(schemas, "finding", gap_core::entities::Finding);
        register!(schemas, "report", gap_core::entities::Report);

        // --- Display views (4) ---
        register!(
            schemas,
            "action_items",
            gap_core::responses::ActionItemsView
        );
        register!(schemas, "gap_buckets", gap_core::responses::GapBuckets);
        register!(
            schemas,
            "report_summary",
            gap_core::responses::ReportSummaryView
        );
        register!(
            schemas,
            "rule_descriptor",
            gap_core::responses::RuleDescriptor
        );

        Ok(Self { schemas })
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}
