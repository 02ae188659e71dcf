//! # brandrec-core
//!
//! Foundation crate for the brand recommender.
//! Defines the category tables, feature and result types, the classifier and
//! scaler traits, errors, config, and constants. Every other crate in the
//! workspace depends on this.

pub mod category;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use category::{CategoryField, CategoryTable};
pub use config::BrandrecConfig;
pub use errors::{BrandrecError, BrandrecResult};
pub use models::{BrandScore, FeatureVector, RawRecommendationRequest, Recommendation, RecommendationRequest};
pub use traits::{IClassifier, IScaler};
