//! Column type mapping records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MappingStatus;
use crate::naming::matches;

/// How one source column's type translates to the target and ORM.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Mapping {
    /// Source table name.
    pub table: String,
    /// Source column name.
    pub column: String,
    #[serde(alias = "sourceType")]
    pub source_type: String,
    #[serde(alias = "targetType")]
    pub target_type: String,
    #[serde(default, alias = "ormType", skip_serializing_if = "Option::is_none")]
    pub orm_type: Option<String>,
    #[serde(alias = "migrationStatus")]
    pub status: MappingStatus,
    #[serde(default, alias = "notes", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Mapping {
    /// Whether this mapping describes `table.column`, with each component
    /// compared by [`matches`].
    #[must_use]
    pub fn refers_to(&self, table: &str, column: &str) -> bool {
        matches(&self.table, table) && matches(&self.column, column)
    }

    /// Whether the recorded target type differs from `actual`, ignoring case.
    #[must_use]
    pub fn target_type_differs(&self, actual: &str) -> bool {
        self.target_type.to_lowercase() != actual.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(table: &str, column: &str, target_type: &str) -> Mapping {
        Mapping {
            table: table.into(),
            column: column.into(),
            source_type: "int".into(),
            target_type: target_type.into(),
            orm_type: None,
            status: MappingStatus::Success,
            note: None,
        }
    }

    #[test]
    fn refers_to_is_convention_insensitive() {
        let m = mapping("user_accounts", "created_at", "timestamp");
        assert!(m.refers_to("UserAccounts", "createdAt"));
        assert!(m.refers_to("USER_ACCOUNTS", "created_at"));
        assert!(!m.refers_to("user_accounts", "updated_at"));
    }

    #[test]
    fn refers_to_rejects_shifted_separators() {
        let m = mapping("pro_file_user", "id", "int");
        assert!(!m.refers_to("profile_user", "id"));
        assert!(!mapping("orders", "user_id", "int").refers_to("orders", "userid_"));
    }

    #[test]
    fn target_type_comparison_ignores_case() {
        let m = mapping("orders", "total", "NUMERIC(10,2)");
        assert!(!m.target_type_differs("numeric(10,2)"));
        assert!(m.target_type_differs("double precision"));
    }

    #[test]
    fn deserializes_camel_case_seed() {
        let m: Mapping = serde_json::from_value(serde_json::json!({
            "table": "orders",
            "column": "total",
            "sourceType": "decimal(10,2)",
            "targetType": "numeric(10,2)",
            "ormType": "Decimal",
            "migrationStatus": "warning",
            "notes": "precision reviewed"
        }))
        .unwrap();
        assert_eq!(m.status, MappingStatus::Warning);
        assert_eq!(m.orm_type.as_deref(), Some("Decimal"));
        assert_eq!(m.note.as_deref(), Some("precision reviewed"));
    }
}
