//! Phase 4: foreign key and relation consistency.
//!
//! Foreign key differences are reported as warnings only: enforcement
//! differences between engines do not block a migration.

use concord_core::enums::Component;
use concord_core::naming::{matches, normalized_set};
use concord_core::report::AuditIssue;
use concord_core::schema::ForeignKey;

use super::{MatchedTable, PhaseOutcome};

pub fn run(matched: &[MatchedTable<'_>]) -> PhaseOutcome {
    let mut outcome = PhaseOutcome::default();

    for table in matched {
        for fk in &table.source.foreign_keys {
            if !target_has(table, fk) {
                outcome.push(
                    table.row,
                    AuditIssue::warning(
                        Component::Target,
                        &table.source.name,
                        format!(
                            "Foreign key '{}' is missing from target table '{}'",
                            fk.name, table.target.name
                        ),
                    )
                    .with_details(fk.describe())
                    .with_recommendation(
                        "Confirm whether dropping this foreign key is intentional",
                    ),
                );
            }

            if !orm_has(table, fk) {
                outcome.push(
                    table.row,
                    AuditIssue::warning(
                        Component::Orm,
                        &table.source.name,
                        format!(
                            "No relation in ORM model '{}' matches foreign key '{}'",
                            table.model.name, fk.name
                        ),
                    )
                    .with_details(fk.describe())
                    .with_recommendation(
                        "Confirm the relation is not needed or add it to the ORM model",
                    ),
                );
            }
        }
    }

    tracing::debug!(issues = outcome.issues.len(), "relations checked");
    outcome
}

fn target_has(table: &MatchedTable<'_>, fk: &ForeignKey) -> bool {
    let columns = normalized_set(&fk.columns);
    table.target.foreign_keys.iter().any(|candidate| {
        normalized_set(&candidate.columns) == columns
            && matches(&candidate.referenced_table, &fk.referenced_table)
    })
}

fn orm_has(table: &MatchedTable<'_>, fk: &ForeignKey) -> bool {
    table
        .model
        .relations
        .iter()
        .any(|relation| matches(&relation.to_model, &fk.referenced_table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{matched, model, schema, table};
    use concord_core::enums::Severity;
    use concord_core::orm::Relation;
    use pretty_assertions::assert_eq;

    fn fk(columns: &[&str], referenced: &str) -> ForeignKey {
        ForeignKey {
            name: format!("fk_{referenced}"),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            referenced_table: referenced.into(),
            referenced_columns: vec!["id".into()],
        }
    }

    fn relation(to_model: &str) -> Relation {
        Relation {
            name: "owner".into(),
            fields: vec!["ownerId".into()],
            to_model: to_model.into(),
            references: vec!["id".into()],
        }
    }

    #[test]
    fn matching_fk_and_relation_are_clean() {
        let mut source = schema(vec![table("orders", &["id", "user_id"])]);
        source.tables[0].foreign_keys.push(fk(&["user_id"], "user_accounts"));
        let mut target = schema(vec![table("orders", &["id", "user_id"])]);
        target.tables[0].foreign_keys.push(fk(&["USER_ID"], "user_accounts"));
        let mut orders = model("Orders", &["id", "userId"]);
        orders.relations.push(relation("UserAccounts"));
        let models = vec![orders];

        assert!(run(&matched(&source, &target, &models)).issues.is_empty());
    }

    #[test]
    fn missing_fk_and_relation_are_warnings() {
        let mut source = schema(vec![table("orders", &["id", "user_id"])]);
        source.tables[0].foreign_keys.push(fk(&["user_id"], "users"));
        let target = schema(vec![table("orders", &["id", "user_id"])]);
        let models = vec![model("Orders", &["id", "userId"])];

        let outcome = run(&matched(&source, &target, &models));
        let found: Vec<(Severity, Component)> =
            outcome.issues.iter().map(|i| (i.severity, i.component)).collect();
        assert_eq!(
            found,
            vec![(Severity::Warning, Component::Target), (Severity::Warning, Component::Orm)]
        );
        assert_eq!(
            outcome.issues[0].details.as_deref(),
            Some("Columns: user_id, References: users(id)")
        );
    }

    #[test]
    fn partial_column_overlap_is_a_mismatch() {
        let mut source = schema(vec![table("lines", &["order_id", "tenant_id"])]);
        source.tables[0].foreign_keys.push(fk(&["order_id", "tenant_id"], "orders"));
        let mut target = source.clone();
        target.tables[0].foreign_keys = vec![fk(&["order_id"], "orders")];
        let mut lines = model("Lines", &["orderId", "tenantId"]);
        lines.relations.push(relation("Orders"));
        let models = vec![lines];

        let outcome = run(&matched(&source, &target, &models));
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].component, Component::Target);
    }

    #[test]
    fn wrong_referenced_table_is_a_mismatch() {
        let mut source = schema(vec![table("orders", &["user_id"])]);
        source.tables[0].foreign_keys.push(fk(&["user_id"], "users"));
        let mut target = source.clone();
        target.tables[0].foreign_keys = vec![fk(&["user_id"], "customers")];
        let mut orders = model("Orders", &["userId"]);
        orders.relations.push(relation("Customers"));
        let models = vec![orders];

        assert_eq!(run(&matched(&source, &target, &models)).issues.len(), 2);
    }
}
