//! # brandrec-model
//!
//! Trained artifacts the recommender runs against: a softmax-linear
//! classifier and a standard scaler, both stored as JSON and validated when
//! loaded. Loading happens once at startup; the loaded values are plain
//! immutable data and safe to share across threads.

pub mod artifact;
pub mod loader;
pub mod scaler;
pub mod softmax;

pub use artifact::ClassifierArtifact;
pub use loader::{load_classifier, load_scaler, ArtifactSet};
pub use scaler::StandardScaler;
pub use softmax::SoftmaxClassifier;
