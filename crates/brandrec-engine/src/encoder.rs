//! Request → feature vector.

use brandrec_core::category::{OPERATING_SYSTEM, PICTURE_QUALITY, REFRESH_RATE, SPEAKER};
use brandrec_core::constants::{MAX_STARS, MIN_STARS};
use brandrec_core::errors::{BrandrecError, BrandrecResult};
use brandrec_core::models::{FeatureVector, RecommendationRequest};

/// Encode a request as `[stars, price, os, speaker, refresh_rate, picture_quality]`.
///
/// Categories are checked in feature order, so the first unknown label is
/// the one reported. No defaults are substituted. Stars outside
/// `MIN_STARS..=MAX_STARS` (NaN included) are rejected.
pub fn encode(request: &RecommendationRequest) -> BrandrecResult<FeatureVector> {
    let os = OPERATING_SYSTEM.lookup(&request.operating_system)?;
    let speaker = SPEAKER.lookup(&request.speaker)?;
    let refresh_rate = REFRESH_RATE.lookup(&request.refresh_rate)?;
    let picture_quality = PICTURE_QUALITY.lookup(&request.picture_quality)?;

    if !(MIN_STARS..=MAX_STARS).contains(&request.stars) {
        return Err(BrandrecError::InvalidNumericInput {
            field: "stars",
            value: request.stars.to_string(),
        });
    }

    Ok(FeatureVector::new([
        request.stars,
        request.price as f64,
        f64::from(os),
        f64::from(speaker),
        f64::from(refresh_rate),
        f64::from(picture_quality),
    ]))
}
