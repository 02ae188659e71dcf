use serde::{Deserialize, Serialize};

use crate::constants::{FEATURE_COUNT, FEATURE_NAMES};
use crate::errors::InferenceError;

/// Fixed-order numeric encoding of one request.
///
/// Slots: `[stars, price, operating_system, speaker, refresh_rate, picture_quality]`.
/// The length is fixed by the type; finiteness is checked by whoever builds it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Rebuild a vector from a transform's output, rejecting any other length.
    pub fn from_slice(values: &[f64]) -> Result<Self, InferenceError> {
        let array: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| {
            InferenceError::FeatureCountMismatch {
                expected: FEATURE_COUNT,
                actual: values.len(),
            }
        })?;
        Ok(Self(array))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// `(slot name, value)` pairs, for logging.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}
