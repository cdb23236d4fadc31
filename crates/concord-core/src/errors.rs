//! Input error types for Concord.
//!
//! Schema disagreements are never errors: they are recorded as audit issues.
//! The only fatal condition is an input document that cannot be obtained or
//! decoded, and every variant names which input failed. Crate-specific errors
//! (`OrmError`, `ConfigError`, `SchemaError`) live in their own crates and
//! converge in `concord-cli`.

use std::path::PathBuf;

use thiserror::Error;

use crate::enums::InputKind;

/// A fatal failure while loading one of the audit inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// No path was supplied for a required input.
    #[error("No path configured for the {kind} input")]
    NotConfigured { kind: InputKind },

    /// The path does not exist.
    #[error("The {kind} input does not exist: {}", path.display())]
    Missing { kind: InputKind, path: PathBuf },

    /// The file exists but could not be read.
    #[error("Failed to read the {kind} input {}: {source}", path.display())]
    Unreadable {
        kind: InputKind,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was read but is not a valid document.
    #[error("Failed to parse the {kind} input {}: {source}", path.display())]
    Malformed {
        kind: InputKind,
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl InputError {
    /// Which input failed.
    #[must_use]
    pub const fn kind(&self) -> InputKind {
        match self {
            Self::NotConfigured { kind }
            | Self::Missing { kind, .. }
            | Self::Unreadable { kind, .. }
            | Self::Malformed { kind, .. } => *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_failing_input() {
        let err = InputError::Missing {
            kind: InputKind::Target,
            path: PathBuf::from("/tmp/pg.json"),
        };
        assert_eq!(
            err.to_string(),
            "The target schema input does not exist: /tmp/pg.json"
        );
        assert_eq!(err.kind(), InputKind::Target);
    }

    #[test]
    fn malformed_exposes_json_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = InputError::Malformed {
            kind: InputKind::Mappings,
            path: PathBuf::from("seed.json"),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to parse the seed mappings input seed.json"));
    }
}
