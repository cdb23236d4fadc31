//! Per-run lookup indexes over the three inputs.

use concord_core::naming::NameIndex;
use concord_core::orm::Model;
use concord_core::schema::{SchemaDocument, Table};

/// Immutable indexes built once per run and passed into each phase.
#[derive(Debug)]
pub struct RunContext<'a> {
    pub source: &'a SchemaDocument,
    pub targets: NameIndex<'a, Table>,
    pub models: NameIndex<'a, Model>,
}

impl<'a> RunContext<'a> {
    #[must_use]
    pub fn new(source: &'a SchemaDocument, target: &'a SchemaDocument, models: &'a [Model]) -> Self {
        Self {
            source,
            targets: NameIndex::build(&target.tables, |t| t.name.as_str()),
            models: NameIndex::build(models, |m| m.name.as_str()),
        }
    }
}
