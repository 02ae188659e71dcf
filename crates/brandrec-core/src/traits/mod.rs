mod classifier;
mod scaler;

pub use classifier::IClassifier;
pub use scaler::IScaler;
