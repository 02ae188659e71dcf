use serde::{Deserialize, Serialize};

use crate::errors::{BrandrecError, BrandrecResult};

/// A typed recommendation request.
///
/// Categorical fields hold the raw labels; they are resolved against the
/// category tables when the request is encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub stars: f64,
    pub price: i64,
    pub operating_system: String,
    pub speaker: String,
    pub refresh_rate: String,
    pub picture_quality: String,
}

impl RecommendationRequest {
    pub fn new(
        stars: f64,
        price: i64,
        operating_system: impl Into<String>,
        speaker: impl Into<String>,
        refresh_rate: impl Into<String>,
        picture_quality: impl Into<String>,
    ) -> Self {
        Self {
            stars,
            price,
            operating_system: operating_system.into(),
            speaker: speaker.into(),
            refresh_rate: refresh_rate.into(),
            picture_quality: picture_quality.into(),
        }
    }
}

/// A request as a form submission delivers it: every field a string.
///
/// The aliases accept the field names of the original product form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecommendationRequest {
    pub stars: String,
    #[serde(alias = "MRP")]
    pub price: String,
    #[serde(alias = "Operating_system1")]
    pub operating_system: String,
    #[serde(alias = "Speaker1")]
    pub speaker: String,
    #[serde(alias = "Frequency1")]
    pub refresh_rate: String,
    #[serde(alias = "Picture_qualtiy1")]
    pub picture_quality: String,
}

impl RawRecommendationRequest {
    /// Convert to a typed request.
    ///
    /// `stars` accepts any finite decimal (its range is checked at encoding);
    /// `price` must be an integer.
    /// Categorical fields pass through untouched.
    pub fn parse(&self) -> BrandrecResult<RecommendationRequest> {
        let stars = parse_stars(&self.stars)?;
        let price = parse_price(&self.price)?;
        Ok(RecommendationRequest {
            stars,
            price,
            operating_system: self.operating_system.clone(),
            speaker: self.speaker.clone(),
            refresh_rate: self.refresh_rate.clone(),
            picture_quality: self.picture_quality.clone(),
        })
    }
}

fn parse_stars(raw: &str) -> BrandrecResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| BrandrecError::InvalidNumericInput {
            field: "stars",
            value: raw.to_string(),
        })
}

fn parse_price(raw: &str) -> BrandrecResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| BrandrecError::InvalidNumericInput {
            field: "price",
            value: raw.to_string(),
        })
}
