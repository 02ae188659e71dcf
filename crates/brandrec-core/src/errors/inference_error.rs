/// Errors raised while running a loaded artifact against a feature vector.
///
/// Every variant points at the deployment, never at the caller's input.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("classifier returned {actual} probabilities, expected {expected} (one per brand label)")]
    ClassCountMismatch { expected: usize, actual: usize },

    #[error("feature vector length mismatch: expected {expected}, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("classifier returned non-finite probability {value} for {label}")]
    NonFiniteProbability { label: String, value: f64 },

    #[error("scaler failed: {reason}")]
    ScalerFailed { reason: String },

    #[error("classifier {classifier} failed: {reason}")]
    ClassifierFailed { classifier: String, reason: String },
}
