//! Report rendering preferences.

use serde::{Deserialize, Serialize};

const fn default_pretty() -> bool {
    true
}

const fn default_preview_issues() -> usize {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Pretty-print the JSON report.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Number of issues listed in the stderr summary.
    #[serde(default = "default_preview_issues")]
    pub preview_issues: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            preview_issues: default_preview_issues(),
        }
    }
}
