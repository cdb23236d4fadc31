//! Audit issues, table status rows, and the audit report document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Component, MappingStatus, Severity};
use crate::mapping::Mapping;
use crate::naming::matches;

/// A single disagreement found while reconciling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditIssue {
    pub severity: Severity,
    pub component: Component,
    pub table: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl AuditIssue {
    #[must_use]
    pub fn new(
        severity: Severity,
        component: Component,
        table: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            component,
            table: table.into(),
            column: None,
            message: message.into(),
            details: None,
            recommendation: None,
        }
    }

    #[must_use]
    pub fn error(component: Component, table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, component, table, message)
    }

    #[must_use]
    pub fn warning(
        component: Component,
        table: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, component, table, message)
    }

    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    /// `table` or `table.column`.
    #[must_use]
    pub fn location(&self) -> String {
        match &self.column {
            Some(column) => format!("{}.{column}", self.table),
            None => self.table.clone(),
        }
    }
}

/// Per-table presence flags and issue counters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TableStatus {
    pub name: String,
    pub source: bool,
    pub target: bool,
    pub orm: bool,
    pub column_count: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl TableStatus {
    /// Whether the table was found on all three sides.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.source && self.target && self.orm
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditSummary {
    pub total_tables: usize,
    pub total_columns: usize,
    pub successful_mappings: usize,
    pub warning_mappings: usize,
    pub error_mappings: usize,
    /// Incremented once per missing side, so a table absent from both the
    /// target and the ORM counts twice.
    pub missing_tables: usize,
    pub missing_columns: usize,
    pub type_mismatches: usize,
}

/// The complete output of one reconciliation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditReport {
    pub summary: AuditSummary,
    pub tables: Vec<TableStatus>,
    pub issues: Vec<AuditIssue>,
    pub mappings: Vec<Mapping>,
}

impl AuditReport {
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Whether the run should be reported as failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Issues attributed to `table`.
    pub fn issues_for<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a AuditIssue> + 'a {
        self.issues.iter().filter(move |i| matches(&i.table, table))
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableStatus> {
        self.tables.iter().find(|t| matches(&t.name, name))
    }

    #[must_use]
    pub fn mappings_with(&self, status: MappingStatus) -> usize {
        self.mappings.iter().filter(|m| m.status == status).count()
    }
}
