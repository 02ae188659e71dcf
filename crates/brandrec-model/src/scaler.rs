//! Standard scaler: `z = (x - mean) / scale` per feature.

use brandrec_core::constants::FEATURE_COUNT;
use brandrec_core::errors::{ArtifactError, BrandrecResult, InferenceError};
use brandrec_core::traits::IScaler;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    /// Structural checks run at load time. `path` only labels the error.
    pub fn validate(&self, path: &str) -> Result<(), ArtifactError> {
        let malformed = |reason: String| ArtifactError::Malformed {
            path: path.to_string(),
            reason,
        };
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(malformed(format!(
                "expected {FEATURE_COUNT} means and scales, got {} and {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if !self.mean.iter().chain(&self.scale).all(|v| v.is_finite()) {
            return Err(malformed("non-finite statistic".to_string()));
        }
        if let Some(i) = self.scale.iter().position(|&s| s == 0.0) {
            return Err(malformed(format!("zero scale for feature {i}")));
        }
        Ok(())
    }
}

impl IScaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> BrandrecResult<Vec<f64>> {
        if features.len() != self.mean.len() {
            return Err(InferenceError::FeatureCountMismatch {
                expected: self.mean.len(),
                actual: features.len(),
            }
            .into());
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }

    fn name(&self) -> &str {
        "standard"
    }
}
