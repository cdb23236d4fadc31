//! Default input and output locations for `concord audit`.

use serde::{Deserialize, Serialize};

/// Paths used when the matching command-line flag is omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputsConfig {
    /// Source schema JSON document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Target schema JSON document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// ORM model text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orm: Option<String>,

    /// Seed mappings JSON array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<String>,

    /// Where to write the report. Standard output when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unset() {
        let config = InputsConfig::default();
        assert!(config.source.is_none());
        assert!(config.output.is_none());
    }
}
