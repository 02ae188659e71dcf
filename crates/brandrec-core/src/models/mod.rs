mod feature_vector;
mod recommendation;
mod request;

pub use feature_vector::FeatureVector;
pub use recommendation::{BrandScore, Recommendation};
pub use request::{RawRecommendationRequest, RecommendationRequest};
