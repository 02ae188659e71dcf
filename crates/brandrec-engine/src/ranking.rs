//! Probability vector → ranked brands.

use std::cmp::Ordering;

use brandrec_core::errors::InferenceError;
use brandrec_core::models::BrandScore;

/// Pair labels with probabilities by position, sort descending, keep `top_k`.
///
/// The sort is stable, so equal probabilities keep label order. Fewer than
/// `top_k` labels is fine; every pair is returned. A length mismatch or a
/// non-finite probability is an error: positional pairing would otherwise
/// produce a plausible but meaningless ranking.
pub fn rank(
    labels: &[&str],
    probabilities: &[f64],
    top_k: usize,
) -> Result<Vec<BrandScore>, InferenceError> {
    if probabilities.len() != labels.len() {
        return Err(InferenceError::ClassCountMismatch {
            expected: labels.len(),
            actual: probabilities.len(),
        });
    }
    if let Some((label, &value)) = labels
        .iter()
        .zip(probabilities)
        .find(|(_, p)| !p.is_finite())
    {
        return Err(InferenceError::NonFiniteProbability {
            label: label.to_string(),
            value,
        });
    }

    let mut scores: Vec<BrandScore> = labels
        .iter()
        .zip(probabilities)
        .map(|(label, &probability)| BrandScore {
            label: label.to_string(),
            probability,
        })
        .collect();
    // Values are finite here; `-0.0` and `0.0` compare equal and stay in label order.
    scores.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    scores.truncate(top_k);
    Ok(scores)
}
