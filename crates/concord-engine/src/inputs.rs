//! Loading the audit inputs from disk.
//!
//! Every failure here is fatal and names the input that failed. Once
//! [`load_inputs`] succeeds, reconciliation cannot fail.

use std::path::{Path, PathBuf};

use concord_core::enums::InputKind;
use concord_core::errors::InputError;
use concord_core::mapping::Mapping;
use concord_core::orm::Model;
use concord_core::schema::SchemaDocument;
use concord_orm::OrmError;
use serde::de::DeserializeOwned;

/// Locations of the audit inputs. `mappings` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPaths {
    pub source: Option<PathBuf>,
    pub target: Option<PathBuf>,
    pub orm: Option<PathBuf>,
    pub mappings: Option<PathBuf>,
}

/// Parsed inputs for one run.
#[derive(Debug, Clone, Default)]
pub struct AuditInputs {
    pub source: SchemaDocument,
    pub target: SchemaDocument,
    pub models: Vec<Model>,
    pub seeds: Vec<Mapping>,
}

/// Read and parse all inputs.
///
/// # Errors
///
/// Returns an [`InputError`] identifying the first input that is not
/// configured, missing, unreadable, or not a valid document.
pub fn load_inputs(paths: &InputPaths) -> Result<AuditInputs, InputError> {
    let source = read_json(InputKind::Source, require(InputKind::Source, paths.source.as_deref())?)?;
    let target = read_json(InputKind::Target, require(InputKind::Target, paths.target.as_deref())?)?;
    let models = read_models(require(InputKind::Orm, paths.orm.as_deref())?)?;
    let seeds = match paths.mappings.as_deref() {
        Some(path) => read_json(InputKind::Mappings, path)?,
        None => Vec::new(),
    };

    tracing::info!(
        source_tables = %describe(&source),
        target_tables = %describe(&target),
        models = models.len(),
        seeds = seeds.len(),
        "loaded audit inputs"
    );

    Ok(AuditInputs {
        source,
        target,
        models,
        seeds,
    })
}

fn describe(doc: &SchemaDocument) -> String {
    format!("{} ({} columns)", doc.tables.len(), doc.column_count())
}

fn require(kind: InputKind, path: Option<&Path>) -> Result<&Path, InputError> {
    path.ok_or(InputError::NotConfigured { kind })
}

fn ensure_exists(kind: InputKind, path: &Path) -> Result<(), InputError> {
    if path.exists() {
        Ok(())
    } else {
        Err(InputError::Missing {
            kind,
            path: path.to_path_buf(),
        })
    }
}

fn read_json<T: DeserializeOwned>(kind: InputKind, path: &Path) -> Result<T, InputError> {
    ensure_exists(kind, path)?;
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| InputError::Malformed {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

fn read_models(path: &Path) -> Result<Vec<Model>, InputError> {
    ensure_exists(InputKind::Orm, path)?;
    concord_orm::load_models(path).map_err(|err| match err {
        OrmError::Io { path, source } => InputError::Unreadable {
            kind: InputKind::Orm,
            path,
            source,
        },
    })
}
