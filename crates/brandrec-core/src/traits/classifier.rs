use crate::errors::BrandrecResult;

/// Probabilistic classifier over the brand label set.
///
/// Implementations must be safe for concurrent read-only use: the engine
/// shares one instance across every request.
pub trait IClassifier: Send + Sync {
    /// Per-class probabilities for one feature vector, in label order.
    fn predict_proba(&self, features: &[f64]) -> BrandrecResult<Vec<f64>>;

    /// Number of classes this classifier emits.
    fn n_classes(&self) -> usize;

    /// Human-readable classifier name.
    fn name(&self) -> &str;
}
