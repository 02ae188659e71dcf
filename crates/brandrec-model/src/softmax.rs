//! Multinomial logistic regression: `softmax(W·x + b)`.

use brandrec_core::constants::{BRAND_LABELS, FEATURE_COUNT};
use brandrec_core::errors::{ArtifactError, BrandrecResult, InferenceError};
use brandrec_core::traits::IClassifier;
use serde::{Deserialize, Serialize};

/// Linear classifier with one weight row and intercept per class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftmaxClassifier {
    /// Class labels the model was trained with. When present they must equal
    /// `BRAND_LABELS` exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
    /// `coefficients[c][f]`: weight of feature `f` for class `c`.
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl SoftmaxClassifier {
    pub fn new(coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Self {
        Self {
            classes: None,
            coefficients,
            intercepts,
        }
    }

    /// A classifier that assigns every brand the same probability.
    pub fn uniform(n_classes: usize) -> Self {
        Self::new(vec![vec![0.0; FEATURE_COUNT]; n_classes], vec![0.0; n_classes])
    }

    /// Structural checks run at load time. `path` only labels the error.
    pub fn validate(&self, path: &str) -> Result<(), ArtifactError> {
        let malformed = |reason: String| ArtifactError::Malformed {
            path: path.to_string(),
            reason,
        };

        if self.coefficients.is_empty() {
            return Err(malformed("no classes".to_string()));
        }
        if self.coefficients.len() != self.intercepts.len() {
            return Err(malformed(format!(
                "{} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        if let Some((class, row)) = self
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != FEATURE_COUNT)
        {
            return Err(malformed(format!(
                "coefficient row {class} has {} weights, expected {FEATURE_COUNT}",
                row.len()
            )));
        }
        let all_finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(self.intercepts.iter())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(malformed("non-finite weight".to_string()));
        }

        if self.coefficients.len() != BRAND_LABELS.len() {
            return Err(ArtifactError::LabelMismatch {
                path: path.to_string(),
                reason: format!(
                    "model has {} classes, brand label set has {}",
                    self.coefficients.len(),
                    BRAND_LABELS.len()
                ),
            });
        }
        if let Some(classes) = &self.classes {
            if let Some((i, (got, want))) = classes
                .iter()
                .zip(BRAND_LABELS.iter())
                .enumerate()
                .find(|(_, (got, want))| got.as_str() != **want)
            {
                return Err(ArtifactError::LabelMismatch {
                    path: path.to_string(),
                    reason: format!("class {i} is {got:?}, expected {want:?}"),
                });
            }
            if classes.len() != BRAND_LABELS.len() {
                return Err(ArtifactError::LabelMismatch {
                    path: path.to_string(),
                    reason: format!("{} class labels listed", classes.len()),
                });
            }
        }
        Ok(())
    }

    fn logits(&self, features: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(self.intercepts.iter())
            .map(|(row, b)| row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect()
    }
}

impl IClassifier for SoftmaxClassifier {
    fn predict_proba(&self, features: &[f64]) -> BrandrecResult<Vec<f64>> {
        if features.len() != FEATURE_COUNT {
            return Err(InferenceError::FeatureCountMismatch {
                expected: FEATURE_COUNT,
                actual: features.len(),
            }
            .into());
        }
        Ok(softmax(&self.logits(features)))
    }

    fn n_classes(&self) -> usize {
        self.intercepts.len()
    }

    fn name(&self) -> &str {
        "softmax_linear"
    }
}

/// Numerically stable softmax (max-subtracted).
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let exp: Vec<f64> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f64 = exp.iter().sum();
    exp.iter().map(|&x| x / sum).collect()
}
