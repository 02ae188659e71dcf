use crate::errors::BrandrecResult;

/// Fixed feature normalization learned at training time.
pub trait IScaler: Send + Sync {
    /// Transform one feature vector. The output has the input's length.
    fn transform(&self, features: &[f64]) -> BrandrecResult<Vec<f64>>;

    /// Human-readable scaler name.
    fn name(&self) -> &str;
}
