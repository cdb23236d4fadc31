//! # concord-config
//!
//! Layered configuration loading for Concord using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CONCORD_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.concord/config.toml`
//! 4. User-level `~/.config/concord/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CONCORD_INPUTS__SOURCE` -> `inputs.source`,
//! `CONCORD_REPORT__PREVIEW_ISSUES` -> `report.preview_issues`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use concord_config::ConcordConfig;
//!
//! let config = ConcordConfig::load_with_dotenv(None).expect("config");
//! if let Some(source) = &config.inputs.source {
//!     println!("source schema: {source}");
//! }
//! ```

mod error;
mod inputs;
mod report;

pub use error::ConfigError;
pub use inputs::InputsConfig;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConcordConfig {
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl ConcordConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a layer cannot be parsed or
    /// extracted, and [`ConfigError::InvalidValue`] for a missing `extra`
    /// file or configured but empty paths.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = extra.filter(|p| !p.exists()) {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("file does not exist: {}", path.display()),
            });
        }
        let config: Self = Self::figment(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load(extra)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".concord/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = extra {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed("CONCORD_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("concord").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("inputs.source", &self.inputs.source),
            ("inputs.target", &self.inputs.target),
            ("inputs.orm", &self.inputs.orm),
            ("inputs.mappings", &self.inputs.mappings),
            ("inputs.output", &self.inputs.output),
        ];
        for (field, value) in paths {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
