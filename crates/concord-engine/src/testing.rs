//! Fixture builders shared by the phase tests.

use concord_core::orm::{Field, Model};
use concord_core::schema::{Column, SchemaDocument, Table};

use crate::context::RunContext;
use crate::phases::{MatchedTable, presence};

pub fn schema(tables: Vec<Table>) -> SchemaDocument {
    SchemaDocument { tables }
}

/// A table of non-nullable `int` columns without keys.
pub fn table(name: &str, columns: &[&str]) -> Table {
    Table {
        name: name.into(),
        columns: columns
            .iter()
            .map(|c| Column {
                name: (*c).to_string(),
                column_type: "int".into(),
                nullable: false,
                default_value: None,
                extra: None,
                comment: None,
            })
            .collect(),
        primary_key: None,
        foreign_keys: vec![],
        indexes: vec![],
    }
}

/// A model of `Int` fields as the loader produces them: optional, no markers.
pub fn model(name: &str, fields: &[&str]) -> Model {
    Model {
        name: name.into(),
        fields: fields
            .iter()
            .map(|f| Field {
                name: (*f).to_string(),
                field_type: "Int".into(),
                optional: true,
                default: None,
                is_list: false,
                is_id: false,
            })
            .collect(),
        relations: vec![],
        primary_key: None,
    }
}

/// Resolve the matched tables the way the presence phase does.
pub fn matched<'a>(
    source: &'a SchemaDocument,
    target: &'a SchemaDocument,
    models: &'a [Model],
) -> Vec<MatchedTable<'a>> {
    presence::run(&RunContext::new(source, target, models)).matched
}
