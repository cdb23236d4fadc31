//! Phase 2: column consistency, nullability, defaults, and type mappings.

use concord_core::enums::{Component, MappingStatus};
use concord_core::mapping::Mapping;
use concord_core::naming::NameIndex;
use concord_core::orm::Field;
use concord_core::report::AuditIssue;
use concord_core::schema::Column;

use super::{MatchedTable, PhaseOutcome};
use crate::mapping::MappingTable;

const INTENTIONAL: &str = "Confirm whether the difference is intentional";

pub fn run(matched: &[MatchedTable<'_>], mappings: &mut MappingTable) -> PhaseOutcome {
    let mut outcome = PhaseOutcome::default();

    for table in matched {
        let target_columns = NameIndex::build(&table.target.columns, |c| c.name.as_str());
        let orm_fields = NameIndex::build(&table.model.fields, |f| f.name.as_str());

        for column in &table.source.columns {
            let target = target_columns.get(&column.name);
            let field = orm_fields.get(&column.name);

            if target.is_none() {
                outcome.push(
                    table.row,
                    AuditIssue::error(
                        Component::Target,
                        &table.source.name,
                        format!(
                            "Source column '{}' is missing from target table '{}'",
                            column.name, table.target.name
                        ),
                    )
                    .with_column(&column.name)
                    .with_recommendation("Investigate why the column was not migrated"),
                );
                outcome.missing_columns += 1;
            }

            if field.is_none() {
                outcome.push(
                    table.row,
                    AuditIssue::error(
                        Component::Orm,
                        &table.source.name,
                        format!(
                            "Source column '{}' has no matching field in ORM model '{}'",
                            column.name, table.model.name
                        ),
                    )
                    .with_column(&column.name)
                    .with_recommendation("Regenerate the ORM model or add the missing field"),
                );
                outcome.missing_columns += 1;
            }

            if let (Some(target), Some(field)) = (target, field) {
                check_mapping(table, column, target, field, mappings, &mut outcome);
                check_nullability(table, column, target, field, &mut outcome);
                check_defaults(table, column, target, field, &mut outcome);
            }
        }
    }

    tracing::debug!(
        issues = outcome.issues.len(),
        missing_columns = outcome.missing_columns,
        type_mismatches = outcome.type_mismatches,
        "column consistency checked"
    );
    outcome
}

fn check_mapping(
    table: &MatchedTable<'_>,
    column: &Column,
    target: &Column,
    field: &Field,
    mappings: &mut MappingTable,
    outcome: &mut PhaseOutcome,
) {
    if let Some(existing) = mappings.find(&table.source.name, &column.name) {
        if existing.target_type_differs(&target.column_type) {
            outcome.push(
                table.row,
                AuditIssue::warning(
                    Component::Mapping,
                    &table.source.name,
                    format!(
                        "Actual target type '{}' differs from the mapped type '{}'",
                        target.column_type, existing.target_type
                    ),
                )
                .with_column(&column.name)
                .with_recommendation(INTENTIONAL),
            );
            outcome.type_mismatches += 1;
        }
    } else {
        // Synthesized regardless of the nullability/default findings below.
        mappings.upsert(Mapping {
            table: table.source.name.clone(),
            column: column.name.clone(),
            source_type: column.column_type.clone(),
            target_type: target.column_type.clone(),
            orm_type: Some(field.field_type.clone()),
            status: MappingStatus::Success,
            note: None,
        });
    }
    mappings.record(&table.source.name, &column.name);
}

const fn null_label(nullable: bool) -> &'static str {
    if nullable { "NULL" } else { "NOT NULL" }
}

fn check_nullability(
    table: &MatchedTable<'_>,
    column: &Column,
    target: &Column,
    field: &Field,
    outcome: &mut PhaseOutcome,
) {
    if column.nullable != target.nullable {
        outcome.push(
            table.row,
            AuditIssue::warning(
                Component::Target,
                &table.source.name,
                format!(
                    "Nullability differs between source ({}) and target ({})",
                    null_label(column.nullable),
                    null_label(target.nullable)
                ),
            )
            .with_column(&column.name)
            .with_recommendation(INTENTIONAL),
        );
    }

    if column.nullable != !field.optional {
        outcome.push(
            table.row,
            AuditIssue::warning(
                Component::Orm,
                &table.source.name,
                format!(
                    "Nullability differs between source ({}) and ORM ({})",
                    null_label(column.nullable),
                    if field.optional { "optional" } else { "required" }
                ),
            )
            .with_column(&column.name)
            .with_recommendation(INTENTIONAL),
        );
    }
}

fn check_defaults(
    table: &MatchedTable<'_>,
    column: &Column,
    target: &Column,
    field: &Field,
    outcome: &mut PhaseOutcome,
) {
    let Some(default) = column.default_value.as_deref().filter(|_| column.has_default()) else {
        return;
    };

    if !target.has_default() {
        outcome.push(
            table.row,
            AuditIssue::warning(
                Component::Target,
                &table.source.name,
                format!("Source default '{default}' is missing from the target column"),
            )
            .with_column(&column.name)
            .with_recommendation("Confirm whether dropping the default is intentional"),
        );
    }

    if !field.has_default() {
        outcome.push(
            table.row,
            AuditIssue::warning(
                Component::Orm,
                &table.source.name,
                format!("Source default '{default}' is missing from the ORM field"),
            )
            .with_column(&column.name)
            .with_recommendation("Confirm whether dropping the default is intentional"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{matched, model, schema, table};
    use concord_core::enums::Severity;
    use pretty_assertions::assert_eq;

    fn components(outcome: &PhaseOutcome) -> Vec<(Severity, Component)> {
        outcome.issues.iter().map(|i| (i.severity, i.component)).collect()
    }

    #[test]
    fn identical_columns_synthesize_success_mappings() {
        let source = schema(vec![table("orders", &["id", "user_id", "total"])]);
        let target = source.clone();
        let models = vec![model("Orders", &["id", "userId", "total"])];
        let mut mappings = MappingTable::default();

        let outcome = run(&matched(&source, &target, &models), &mut mappings);
        assert!(outcome.issues.is_empty());

        let emitted = mappings.into_touched();
        assert_eq!(emitted.len(), 3);
        assert!(emitted.iter().all(|m| m.status == MappingStatus::Success));
        assert_eq!(emitted[1].orm_type.as_deref(), Some("Int"));
    }

    #[test]
    fn missing_columns_are_errors_on_each_side() {
        let source = schema(vec![table("orders", &["id", "total"])]);
        let target = schema(vec![table("orders", &["id"])]);
        let models = vec![model("Orders", &["id"])];
        let mut mappings = MappingTable::default();

        let outcome = run(&matched(&source, &target, &models), &mut mappings);
        assert_eq!(
            components(&outcome),
            vec![(Severity::Error, Component::Target), (Severity::Error, Component::Orm)]
        );
        assert_eq!(outcome.missing_columns, 2);
        assert_eq!(outcome.issues[0].column.as_deref(), Some("total"));
        assert_eq!(mappings.into_touched().len(), 1);
    }

    #[test]
    fn divergent_seed_mapping_is_one_warning() {
        let source = schema(vec![table("orders", &["id"])]);
        let target = source.clone();
        let models = vec![model("Orders", &["id"])];
        let mut mappings = MappingTable::from_seeds(vec![Mapping {
            table: "orders".into(),
            column: "id".into(),
            source_type: "int".into(),
            target_type: "bigint".into(),
            orm_type: None,
            status: MappingStatus::Success,
            note: None,
        }]);

        let outcome = run(&matched(&source, &target, &models), &mut mappings);
        assert_eq!(components(&outcome), vec![(Severity::Warning, Component::Mapping)]);
        assert_eq!(outcome.type_mismatches, 1);
        assert_eq!(outcome.missing_columns, 0);

        let emitted = mappings.into_touched();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].target_type, "bigint");
    }

    #[test]
    fn nullability_and_default_drift() {
        let mut source = schema(vec![table("users", &["status"])]);
        source.tables[0].columns[0].nullable = true;
        source.tables[0].columns[0].default_value = Some("'active'".into());
        let target = schema(vec![table("users", &["status"])]);
        let models = vec![model("Users", &["status"])];
        let mut mappings = MappingTable::default();

        let outcome = run(&matched(&source, &target, &models), &mut mappings);
        assert_eq!(
            components(&outcome),
            vec![
                (Severity::Warning, Component::Target),
                (Severity::Warning, Component::Orm),
                (Severity::Warning, Component::Target),
                (Severity::Warning, Component::Orm),
            ]
        );
        assert_eq!(
            outcome.issues[0].message,
            "Nullability differs between source (NULL) and target (NOT NULL)"
        );

        // The mapping is still recorded as a success.
        let emitted = mappings.into_touched();
        assert_eq!(emitted[0].status, MappingStatus::Success);
    }

    #[test]
    fn target_default_without_source_default_is_not_checked() {
        let source = schema(vec![table("users", &["status"])]);
        let mut target = source.clone();
        target.tables[0].columns[0].default_value = Some("'x'".into());
        let models = vec![model("Users", &["status"])];
        let mut mappings = MappingTable::default();

        let outcome = run(&matched(&source, &target, &models), &mut mappings);
        assert!(outcome.issues.is_empty());
    }
}
