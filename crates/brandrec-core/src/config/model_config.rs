use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the trained artifacts live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the classifier artifact. Required at startup.
    pub classifier_path: String,
    /// Path to the scaler artifact. `None` disables scaling; a path whose
    /// file does not exist is treated the same way.
    pub scaler_path: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            classifier_path: defaults::DEFAULT_CLASSIFIER_PATH.to_string(),
            scaler_path: Some(defaults::DEFAULT_SCALER_PATH.to_string()),
        }
    }
}
