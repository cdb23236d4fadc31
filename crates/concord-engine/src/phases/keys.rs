//! Phase 3: primary-key consistency.

use concord_core::enums::Component;
use concord_core::naming::{lowercased_set, normalized_set};
use concord_core::report::AuditIssue;

use super::{MatchedTable, PhaseOutcome};

const INTENTIONAL: &str = "Confirm whether the difference is intentional";

pub fn run(matched: &[MatchedTable<'_>]) -> PhaseOutcome {
    let mut outcome = PhaseOutcome::default();

    for table in matched {
        let Some(source_key) = table.source.declared_primary_key() else {
            continue;
        };
        check_target(table, source_key, &mut outcome);
        check_orm(table, source_key, &mut outcome);
    }

    tracing::debug!(issues = outcome.issues.len(), "primary keys checked");
    outcome
}

fn check_target(table: &MatchedTable<'_>, source_key: &[String], outcome: &mut PhaseOutcome) {
    let Some(target_key) = table.target.declared_primary_key() else {
        outcome.push(
            table.row,
            AuditIssue::error(
                Component::Target,
                &table.source.name,
                format!("Target table '{}' has no primary key", table.target.name),
            )
            .with_recommendation("Add the missing primary key to the target table"),
        );
        return;
    };

    if normalized_set(source_key) != normalized_set(target_key) {
        outcome.push(
            table.row,
            AuditIssue::warning(
                Component::Target,
                &table.source.name,
                format!(
                    "Primary key columns differ between source ({}) and target ({})",
                    source_key.join(", "),
                    target_key.join(", ")
                ),
            )
            .with_recommendation(INTENTIONAL),
        );
    }
}

fn check_orm(table: &MatchedTable<'_>, source_key: &[String], outcome: &mut PhaseOutcome) {
    let identifiers = table.model.identifier_fields();
    if identifiers.is_empty() {
        outcome.push(
            table.row,
            AuditIssue::error(
                Component::Orm,
                &table.source.name,
                format!("ORM model '{}' declares no identifier field", table.model.name),
            )
            .with_recommendation("Add an @id attribute to the ORM model"),
        );
        return;
    }

    let same_raw = lowercased_set(source_key) == lowercased_set(&identifiers);
    let same_normalized = normalized_set(source_key) == normalized_set(&identifiers);
    if !same_raw && !same_normalized {
        outcome.push(
            table.row,
            AuditIssue::warning(
                Component::Orm,
                &table.source.name,
                format!(
                    "Primary key columns differ between source ({}) and ORM ({})",
                    source_key.join(", "),
                    identifiers.join(", ")
                ),
            )
            .with_recommendation(INTENTIONAL),
        );
    }
}
