//! Audit report accumulation and the final summary pass.

use concord_core::enums::{MappingStatus, Severity};
use concord_core::mapping::Mapping;
use concord_core::report::{AuditIssue, AuditReport, AuditSummary, TableStatus};

use crate::phases::PhaseOutcome;

/// Collects status rows and issues while the phases run.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    tables: Vec<TableStatus>,
    issues: Vec<AuditIssue>,
    missing_tables: usize,
    missing_columns: usize,
    type_mismatches: usize,
}

impl ReportBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rows(&mut self, rows: impl IntoIterator<Item = TableStatus>) {
        self.tables.extend(rows);
    }

    /// Append a phase's issues, bumping the owning table's counters.
    pub fn merge(&mut self, outcome: PhaseOutcome) {
        self.missing_tables += outcome.missing_tables;
        self.missing_columns += outcome.missing_columns;
        self.type_mismatches += outcome.type_mismatches;

        for (index, issue) in outcome.rows.into_iter().zip(outcome.issues) {
            if let Some(row) = self.tables.get_mut(index) {
                match issue.severity {
                    Severity::Error => row.errors += 1,
                    Severity::Warning => row.warnings += 1,
                    Severity::Info => {}
                }
            } else {
                tracing::debug!(table = %issue.table, "issue has no status row");
            }
            self.issues.push(issue);
        }
    }

    /// Run the summary pass and freeze the report.
    ///
    /// Table and column totals come from the status rows and mapping counts
    /// from `mappings`; neither is cross-checked against the issue-driven
    /// counters.
    #[must_use]
    pub fn finish(self, mappings: Vec<Mapping>) -> AuditReport {
        let count = |status: MappingStatus| mappings.iter().filter(|m| m.status == status).count();

        let summary = AuditSummary {
            total_tables: self.tables.len(),
            total_columns: self.tables.iter().map(|t| t.column_count).sum(),
            successful_mappings: count(MappingStatus::Success),
            warning_mappings: count(MappingStatus::Warning),
            error_mappings: count(MappingStatus::Error),
            missing_tables: self.missing_tables,
            missing_columns: self.missing_columns,
            type_mismatches: self.type_mismatches,
        };

        AuditReport {
            summary,
            tables: self.tables,
            issues: self.issues,
            mappings,
        }
    }
}
