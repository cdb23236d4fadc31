//! Phase 1: table presence.

use concord_core::enums::Component;
use concord_core::report::{AuditIssue, TableStatus};

use super::{MatchedTable, PhaseOutcome};
use crate::context::RunContext;

/// Result of resolving every source table.
#[derive(Debug, Default)]
pub struct PresenceOutcome<'a> {
    /// One row per source table, in source order.
    pub rows: Vec<TableStatus>,
    /// Tables present on all three sides, in source order.
    pub matched: Vec<MatchedTable<'a>>,
    pub outcome: PhaseOutcome,
}

pub fn run<'a>(ctx: &RunContext<'a>) -> PresenceOutcome<'a> {
    let mut result = PresenceOutcome::default();
    let tables: &'a [concord_core::schema::Table] = &ctx.source.tables;

    for (row, source) in tables.iter().enumerate() {
        let target = ctx.targets.get(&source.name);
        let model = ctx.models.get(&source.name);

        result.rows.push(TableStatus {
            name: source.name.clone(),
            source: true,
            target: target.is_some(),
            orm: model.is_some(),
            column_count: source.columns.len(),
            errors: 0,
            warnings: 0,
        });

        if target.is_none() {
            result.outcome.push(
                row,
                AuditIssue::error(
                    Component::Target,
                    &source.name,
                    format!("Source table '{}' is missing from the target schema", source.name),
                )
                .with_recommendation(
                    "Investigate why the table was not migrated to the target database",
                ),
            );
            result.outcome.missing_tables += 1;
        }

        if model.is_none() {
            result.outcome.push(
                row,
                AuditIssue::error(
                    Component::Orm,
                    &source.name,
                    format!("Source table '{}' has no matching ORM model", source.name),
                )
                .with_recommendation("Regenerate the ORM models from the target database"),
            );
            result.outcome.missing_tables += 1;
        }

        if let (Some(target), Some(model)) = (target, model) {
            result.matched.push(MatchedTable {
                row,
                source,
                target,
                model,
            });
        }
    }

    tracing::debug!(
        tables = result.rows.len(),
        matched = result.matched.len(),
        missing = result.outcome.missing_tables,
        "table presence checked"
    );
    result
}
