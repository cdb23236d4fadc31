//! Central schema registry for Concord documents.
//!
//! The `SchemaRegistry` builds JSON Schemas from concord-core types at
//! construction time using [`schemars::schema_for!`] and validates values
//! with `jsonschema`.

use std::collections::HashMap;

use concord_core::mapping::Mapping;
use schemars::schema_for;

use crate::error::SchemaError;

/// Every input and output document Concord reads or writes, by name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry holding the schema, mapping, ORM, and report
    /// document schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Inputs ---
        register!(schemas, "source_schema", concord_core::schema::SchemaDocument);
        register!(schemas, "target_schema", concord_core::schema::SchemaDocument);
        register!(schemas, "orm_model", concord_core::orm::Model);
        register!(schemas, "mapping", Mapping);
        register!(schemas, "mapping_list", Vec<Mapping>);

        // --- Report ---
        register!(schemas, "audit_issue", concord_core::report::AuditIssue);
        register!(schemas, "table_status", concord_core::report::TableStatus);
        register!(schemas, "audit_summary", concord_core::report::AuditSummary);
        register!(schemas, "audit_report", concord_core::report::AuditReport);

        Self { schemas }
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
            .map_err(|e| SchemaError::Compilation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema: name.to_string(),
                errors,
            })
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
