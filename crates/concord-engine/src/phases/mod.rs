//! The four reconciliation phases.
//!
//! Phases run strictly in order: [`presence`] resolves every source table
//! against the target schema and the ORM models, and only the tables it
//! reports as [`MatchedTable`]s are handed to [`columns`], [`keys`] and
//! [`relations`]. Each phase returns a [`PhaseOutcome`] that the report
//! builder merges.

pub mod columns;
pub mod keys;
pub mod presence;
pub mod relations;

use concord_core::orm::Model;
use concord_core::report::AuditIssue;
use concord_core::schema::Table;

/// Issues and counter deltas produced by one phase.
///
/// `rows[i]` is the source-table position that `issues[i]` belongs to.
#[derive(Debug, Default)]
pub struct PhaseOutcome {
    pub issues: Vec<AuditIssue>,
    pub rows: Vec<usize>,
    pub missing_tables: usize,
    pub missing_columns: usize,
    pub type_mismatches: usize,
}

impl PhaseOutcome {
    pub fn push(&mut self, row: usize, issue: AuditIssue) {
        self.rows.push(row);
        self.issues.push(issue);
    }
}

/// A source table found on all three sides.
#[derive(Debug, Clone, Copy)]
pub struct MatchedTable<'a> {
    /// Position of `source` in the source schema, and of its status row.
    pub row: usize,
    pub source: &'a Table,
    pub target: &'a Table,
    pub model: &'a Model,
}
