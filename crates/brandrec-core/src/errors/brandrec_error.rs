use super::error_code;
use super::{ArtifactError, ConfigError, InferenceError};
use crate::category::CategoryField;

/// Top-level error type for the brand recommender.
#[derive(Debug, thiserror::Error)]
pub enum BrandrecError {
    #[error("unrecognized {field} value: {value:?}")]
    InvalidCategory { field: CategoryField, value: String },

    #[error("{field} is not a valid number: {value:?}")]
    InvalidNumericInput { field: &'static str, value: String },

    #[error("model inference failed: {0}")]
    ModelInference(#[from] InferenceError),

    #[error("artifact load failed: {0}")]
    ArtifactLoad(#[from] ArtifactError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl BrandrecError {
    /// True when the caller's request was rejected and the system itself is fine.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            BrandrecError::InvalidCategory { .. } | BrandrecError::InvalidNumericInput { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            BrandrecError::InvalidCategory { .. } => error_code::INVALID_CATEGORY,
            BrandrecError::InvalidNumericInput { .. } => error_code::INVALID_NUMERIC_INPUT,
            BrandrecError::ModelInference(_) => error_code::MODEL_INFERENCE,
            BrandrecError::ArtifactLoad(_) => error_code::ARTIFACT_LOAD,
            BrandrecError::Config(_) => error_code::CONFIG_ERROR,
        }
    }

    /// Formatted string for caller surfaces: `[ERROR_CODE] message`.
    pub fn coded_message(&self) -> String {
        format!("[{}] {}", self.error_code(), self)
    }
}

/// Convenience alias used throughout the workspace.
pub type BrandrecResult<T> = Result<T, BrandrecError>;
