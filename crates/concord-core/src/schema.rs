//! Relational schema documents for the source and target databases.
//!
//! Both documents share one shape. Source analyzers additionally fill
//! `comment` and `extra` on columns; target documents leave them empty.
//! camelCase aliases are accepted because upstream analyzers emit them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A schema document: `{ "tables": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SchemaDocument {
    pub tables: Vec<Table>,
}

impl SchemaDocument {
    /// Total number of columns across all tables.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(
        default,
        alias = "primaryKey",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_key: Option<Vec<String>>,
    #[serde(default, alias = "foreignKeys")]
    pub foreign_keys: Vec<ForeignKey>,
    #[serde(default)]
    pub indexes: Vec<Index>,
}

impl Table {
    /// Declared primary key, treating an empty list as absent.
    #[must_use]
    pub fn declared_primary_key(&self) -> Option<&[String]> {
        self.primary_key
            .as_deref()
            .filter(|columns| !columns.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(
        default,
        alias = "defaultValue",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<String>,
    /// Engine-specific attributes such as `auto_increment` (source only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    /// Free-text column comment (source only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Column {
    /// Whether a non-empty default is declared.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default_value.as_deref().is_some_and(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ForeignKey {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(alias = "referencedTable")]
    pub referenced_table: String,
    #[serde(default, alias = "referencedColumns")]
    pub referenced_columns: Vec<String>,
}

impl ForeignKey {
    /// `columns -> table(columns)` summary used in issue details.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Columns: {}, References: {}({})",
            self.columns.join(", "),
            self.referenced_table,
            self.referenced_columns.join(", ")
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Index {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_camel_case_aliases() {
        let doc: SchemaDocument = serde_json::from_value(serde_json::json!({
            "tables": [{
                "name": "orders",
                "columns": [
                    { "name": "id", "type": "int", "nullable": false, "extra": "auto_increment" },
                    { "name": "status", "type": "varchar(20)", "nullable": true, "defaultValue": "'new'" }
                ],
                "primaryKey": ["id"],
                "foreignKeys": [{
                    "name": "fk_orders_user",
                    "columns": ["user_id"],
                    "referencedTable": "users",
                    "referencedColumns": ["id"]
                }],
                "indexes": []
            }]
        }))
        .unwrap();

        let table = &doc.tables[0];
        assert_eq!(table.declared_primary_key(), Some(&["id".to_string()][..]));
        assert_eq!(table.foreign_keys[0].referenced_table, "users");
        assert_eq!(table.columns[1].default_value.as_deref(), Some("'new'"));
        assert!(table.columns[1].has_default());
        assert_eq!(table.columns[0].extra.as_deref(), Some("auto_increment"));
        assert_eq!(doc.column_count(), 2);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let table: Table = serde_json::from_str(r#"{ "name": "audit_log" }"#).unwrap();
        assert!(table.columns.is_empty());
        assert!(table.foreign_keys.is_empty());
        assert!(table.indexes.is_empty());
        assert!(table.declared_primary_key().is_none());
    }

    #[test]
    fn empty_primary_key_is_absent() {
        let table: Table =
            serde_json::from_str(r#"{ "name": "t", "primary_key": [] }"#).unwrap();
        assert!(table.declared_primary_key().is_none());
    }

    #[test]
    fn foreign_key_description() {
        let fk = ForeignKey {
            name: "fk".into(),
            columns: vec!["user_id".into()],
            referenced_table: "users".into(),
            referenced_columns: vec!["id".into()],
        };
        assert_eq!(fk.describe(), "Columns: user_id, References: users(id)");
    }
}
