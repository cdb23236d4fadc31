//! # concord-engine
//!
//! Three-way schema reconciliation for Concord.
//!
//! [`reconcile`] compares a source schema, a target schema, and ORM models in
//! four ordered phases (table presence, columns, primary keys, relations) and
//! returns an [`AuditReport`]. Disagreements are recorded as issues; the run
//! itself never fails. Input loading, which can fail, lives in [`inputs`].
//!
//! The engine is synchronous and single-threaded. Tables are visited in
//! source document order so identical inputs give identical reports.

pub mod context;
pub mod inputs;
pub mod mapping;
pub mod phases;
pub mod report;

#[cfg(test)]
mod testing;

use concord_core::mapping::Mapping;
use concord_core::orm::Model;
use concord_core::report::AuditReport;
use concord_core::schema::SchemaDocument;

pub use context::RunContext;
pub use inputs::{AuditInputs, InputPaths, load_inputs};
pub use mapping::MappingTable;
pub use report::ReportBuilder;

/// Reconcile the three descriptions and build the audit report.
#[must_use]
pub fn reconcile(
    source: &SchemaDocument,
    target: &SchemaDocument,
    models: &[Model],
    seeds: Vec<Mapping>,
) -> AuditReport {
    let ctx = RunContext::new(source, target, models);
    tracing::info!(
        source_tables = source.tables.len(),
        target_tables = ctx.targets.len(),
        models = ctx.models.len(),
        "starting reconciliation"
    );

    let mut builder = ReportBuilder::new();

    let presence = phases::presence::run(&ctx);
    builder.push_rows(presence.rows);
    builder.merge(presence.outcome);
    let matched = presence.matched;

    let mut mappings = MappingTable::from_seeds(seeds);
    builder.merge(phases::columns::run(&matched, &mut mappings));
    builder.merge(phases::keys::run(&matched));
    builder.merge(phases::relations::run(&matched));

    let report = builder.finish(mappings.into_touched());
    tracing::info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        mappings = report.mappings.len(),
        "reconciliation finished"
    );
    report
}

/// [`reconcile`] over already loaded inputs.
#[must_use]
pub fn audit(inputs: &AuditInputs) -> AuditReport {
    reconcile(
        &inputs.source,
        &inputs.target,
        &inputs.models,
        inputs.seeds.clone(),
    )
}
