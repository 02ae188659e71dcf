use std::collections::HashSet;

use brandrec_core::constants::BRAND_LABELS;
use brandrec_core::errors::BrandrecResult;
use brandrec_core::models::RecommendationRequest;
use brandrec_core::traits::IClassifier;
use brandrec_engine::{rank, RecommendationEngine};
use proptest::prelude::*;

struct FixedClassifier(Vec<f64>);

impl IClassifier for FixedClassifier {
    fn predict_proba(&self, _features: &[f64]) -> BrandrecResult<Vec<f64>> {
        Ok(self.0.clone())
    }
    fn n_classes(&self) -> usize {
        self.0.len()
    }
    fn name(&self) -> &str {
        "fixed"
    }
}

fn request() -> RecommendationRequest {
    RecommendationRequest::new(
        4.2,
        31999,
        "Tizen",
        "30 W Speaker Output",
        "100 Hz Refresh Rate",
        "Ultra HD",
    )
}

fn arb_distribution() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1.0, 16).prop_map(|raw| {
        let sum: f64 = raw.iter().sum::<f64>().max(f64::EPSILON);
        raw.into_iter().map(|v| v / sum).collect()
    })
}

proptest! {
    #[test]
    fn result_is_sorted_bounded_and_unique(probs in arb_distribution()) {
        let engine = RecommendationEngine::new(Box::new(FixedClassifier(probs)), None);
        let rec = engine.recommend(&request()).unwrap();
        prop_assert!(rec.len() <= 5);
        prop_assert!(rec.brands.windows(2).all(|w| w[0].probability >= w[1].probability));
        let labels: HashSet<&str> = rec.labels().into_iter().collect();
        prop_assert_eq!(labels.len(), rec.len());
        prop_assert!(labels.iter().all(|l| BRAND_LABELS.contains(l)));
    }

    #[test]
    fn top_entries_dominate_the_rest(probs in arb_distribution()) {
        let ranked = rank(&BRAND_LABELS, &probs, 5).unwrap();
        let kept: HashSet<&str> = ranked.iter().map(|b| b.label.as_str()).collect();
        let floor = ranked.last().unwrap().probability;
        for (label, p) in BRAND_LABELS.iter().zip(&probs) {
            if !kept.contains(label) {
                prop_assert!(*p <= floor);
            }
        }
    }

    #[test]
    fn short_label_sets_never_fail(n in 0usize..8) {
        let labels: Vec<&str> = BRAND_LABELS[..n].to_vec();
        let probs = vec![0.5; n];
        let ranked = rank(&labels, &probs, 5).unwrap();
        prop_assert_eq!(ranked.len(), n.min(5));
    }

    #[test]
    fn wrong_length_always_fails(n in 0usize..32) {
        prop_assume!(n != 16);
        let engine = RecommendationEngine::new(Box::new(FixedClassifier(vec![0.0; n])), None);
        let err = engine.recommend(&request()).unwrap_err();
        prop_assert!(!err.is_input_error());
    }
}
