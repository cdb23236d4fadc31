//! # concord-orm
//!
//! Permissive loader for ORM model definition files.
//!
//! The text is split into tokens by [`lexer`], then [`parser`] walks
//! `model <Name> { ... }` blocks line by line. Anything that does not fit the
//! field grammar is skipped rather than reported: model files are emitted by
//! an upstream generator and may be incomplete. Only failing to read the file
//! is an error.

pub mod error;
pub mod lexer;
pub mod parser;

use std::path::Path;

use concord_core::orm::Model;

pub use error::OrmError;
pub use parser::parse_models;

/// Read and parse a model definition file.
///
/// # Errors
///
/// Returns [`OrmError::Io`] if the file cannot be read as UTF-8 text.
pub fn load_models(path: &Path) -> Result<Vec<Model>, OrmError> {
    let source = std::fs::read_to_string(path).map_err(|source| OrmError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let models = parse_models(&source);
    tracing::debug!(path = %path.display(), models = models.len(), "loaded model file");
    Ok(models)
}
