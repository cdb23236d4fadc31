//! ORM model types produced by `concord-orm`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Model {
    pub name: String,
    pub fields: Vec<Field>,
    pub relations: Vec<Relation>,
    /// Composite key from a `@@id([...])` block attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<Vec<String>>,
}

impl Model {
    /// Names of the fields that make up the model identifier.
    ///
    /// Field-level `@id` markers take precedence; the `@@id` list is used when
    /// no field carries one.
    #[must_use]
    pub fn identifier_fields(&self) -> Vec<&str> {
        let marked: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.is_id)
            .map(|f| f.name.as_str())
            .collect();
        if !marked.is_empty() {
            return marked;
        }
        self.primary_key
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub is_list: bool,
    pub is_id: bool,
}

impl Field {
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// A relation declared with `@relation(fields: [...], references: [...])`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Relation {
    /// Name of the field carrying the relation.
    pub name: String,
    /// Local fields holding the foreign key.
    pub fields: Vec<String>,
    /// Referenced model (the field's declared type).
    pub to_model: String,
    /// Referenced fields on `to_model`.
    pub references: Vec<String>,
}
