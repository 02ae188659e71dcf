//! RecommendationEngine: encode, scale, infer, rank.

use brandrec_core::config::BrandrecConfig;
use brandrec_core::constants::{BRAND_LABELS, DEFAULT_TOP_K};
use brandrec_core::errors::{BrandrecError, BrandrecResult, InferenceError};
use brandrec_core::models::{
    FeatureVector, RawRecommendationRequest, Recommendation, RecommendationRequest,
};
use brandrec_core::traits::{IClassifier, IScaler};
use brandrec_model::ArtifactSet;
use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::{encoder, ranking};

/// Recommendation pipeline over one classifier and an optional scaler.
///
/// Both artifacts are read-only for the engine's lifetime, so a single
/// engine can serve any number of concurrent callers.
pub struct RecommendationEngine {
    classifier: Box<dyn IClassifier>,
    scaler: Option<Box<dyn IScaler>>,
    top_k: usize,
}

impl RecommendationEngine {
    pub fn new(classifier: Box<dyn IClassifier>, scaler: Option<Box<dyn IScaler>>) -> Self {
        Self {
            classifier,
            scaler,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the number of brands returned.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn from_artifacts(artifacts: ArtifactSet) -> Self {
        Self::new(artifacts.classifier, artifacts.scaler)
    }

    /// Validate the config and load its artifacts.
    pub fn from_config(config: &BrandrecConfig) -> BrandrecResult<Self> {
        config.validate()?;
        let artifacts = ArtifactSet::load(&config.model)?;
        info!(
            classifier = %artifacts.classifier_fingerprint,
            scaler = ?artifacts.scaler_fingerprint,
            top_k = config.ranking.top_k,
            "recommendation engine ready"
        );
        Ok(Self::from_artifacts(artifacts).with_top_k(config.ranking.top_k))
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn is_scaled(&self) -> bool {
        self.scaler.is_some()
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Encode a request without running inference.
    pub fn encode(&self, request: &RecommendationRequest) -> BrandrecResult<FeatureVector> {
        encoder::encode(request)
    }

    /// Rank the brands for one request.
    pub fn recommend(&self, request: &RecommendationRequest) -> BrandrecResult<Recommendation> {
        self.traced(|| self.run(request))
    }

    /// Parse a form-style request, then rank. Parse failures are logged like
    /// any other rejected request.
    pub fn recommend_raw(&self, raw: &RawRecommendationRequest) -> BrandrecResult<Recommendation> {
        self.traced(|| {
            let request = raw.parse()?;
            self.run(&request)
        })
    }

    /// Rank many requests in parallel. Results are in input order and one
    /// failing request does not affect the others.
    pub fn recommend_batch(
        &self,
        requests: &[RecommendationRequest],
    ) -> Vec<BrandrecResult<Recommendation>> {
        let _span = brandrec_observability::batch_span!(requests.len()).entered();
        requests.par_iter().map(|r| self.recommend(r)).collect()
    }

    fn traced(
        &self,
        op: impl FnOnce() -> BrandrecResult<Recommendation>,
    ) -> BrandrecResult<Recommendation> {
        let span = brandrec_observability::recommend_span!(self.classifier.name(), self.is_scaled());
        let _guard = span.enter();

        let result = op();
        match &result {
            Ok(rec) => debug!(
                top_brand = rec.top().map(|b| b.label.as_str()).unwrap_or(""),
                result_count = rec.len(),
                "recommendation produced"
            ),
            Err(e) if e.is_input_error() => {
                debug!(error_code = e.error_code(), error = %e, "request rejected")
            }
            Err(e) => error!(error_code = e.error_code(), error = %e, "inference failed"),
        }
        result
    }

    fn run(&self, request: &RecommendationRequest) -> BrandrecResult<Recommendation> {
        let raw = encoder::encode(request)?;
        let features = self.scale(raw)?;

        let probabilities = self
            .classifier
            .predict_proba(features.as_slice())
            .map_err(|e| {
                as_inference_error(e, |reason| InferenceError::ClassifierFailed {
                    classifier: self.classifier.name().to_string(),
                    reason,
                })
            })?;

        let brands = ranking::rank(&BRAND_LABELS, &probabilities, self.top_k)?;
        Ok(Recommendation::new(brands))
    }

    fn scale(&self, features: FeatureVector) -> BrandrecResult<FeatureVector> {
        let Some(scaler) = &self.scaler else {
            return Ok(features);
        };
        let scaled = scaler
            .transform(features.as_slice())
            .map_err(|e| as_inference_error(e, |reason| InferenceError::ScalerFailed { reason }))?;
        let scaled = FeatureVector::from_slice(&scaled)?;

        // Finite input that scales to a non-finite value is rejected as input.
        let overflowed = scaled
            .named()
            .zip(features.values())
            .find(|((_, v), _)| !v.is_finite());
        match overflowed {
            Some(((field, _), raw)) => Err(BrandrecError::InvalidNumericInput {
                field,
                value: raw.to_string(),
            }),
            None => Ok(scaled),
        }
    }
}

/// Artifact failures always surface as `ModelInference`, whatever error type
/// a particular implementation chose to return.
fn as_inference_error(
    err: BrandrecError,
    wrap: impl FnOnce(String) -> InferenceError,
) -> BrandrecError {
    match err {
        BrandrecError::ModelInference(_) => err,
        other => wrap(other.to_string()).into(),
    }
}
