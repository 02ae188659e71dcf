pub mod defaults;
mod model_config;
mod observability_config;
mod ranking_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use model_config::ModelConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;

use crate::constants::BRAND_LABELS;
use crate::errors::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandrecConfig {
    pub model: ModelConfig,
    pub ranking: RankingConfig,
    pub observability: ObservabilityConfig,
}

impl BrandrecConfig {
    /// Parse a TOML string, then validate it. Missing sections and fields
    /// take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config = Self::parse(toml_str, "<inline>")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file, then validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&contents, &display)?;
        config.validate()?;
        Ok(config)
    }

    fn parse(toml_str: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.classifier_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "model.classifier_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.ranking.top_k == 0 || self.ranking.top_k > BRAND_LABELS.len() {
            return Err(ConfigError::ValidationFailed {
                field: "ranking.top_k".to_string(),
                message: format!(
                    "must be between 1 and {}, got {}",
                    BRAND_LABELS.len(),
                    self.ranking.top_k
                ),
            });
        }
        Ok(())
    }
}
