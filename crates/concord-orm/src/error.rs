//! Loader error types for concord-orm.

use std::path::PathBuf;

/// Document-level failures. Malformed model lines are never errors.
#[derive(Debug, thiserror::Error)]
pub enum OrmError {
    #[error("Failed to read model file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
