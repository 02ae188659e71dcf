use brandrec_core::errors::InferenceError;
use brandrec_core::models::*;
use brandrec_core::BrandrecError;

fn raw(stars: &str, price: &str) -> RawRecommendationRequest {
    RawRecommendationRequest {
        stars: stars.into(),
        price: price.into(),
        operating_system: "Android".into(),
        speaker: "20 W Speaker Output".into(),
        refresh_rate: "60 Hz Refresh Rate".into(),
        picture_quality: "Full HD".into(),
    }
}

#[test]
fn raw_request_parses_numeric_strings() {
    let req = raw("4", "25000").parse().unwrap();
    assert_eq!(req.stars, 4.0);
    assert_eq!(req.price, 25000);
    assert_eq!(req.operating_system, "Android");
}

#[test]
fn raw_request_accepts_decimal_stars_and_trims() {
    let req = raw(" 4.3 ", " 18999\n").parse().unwrap();
    assert_eq!(req.stars, 4.3);
    assert_eq!(req.price, 18999);
}

#[test]
fn non_numeric_stars_rejected() {
    let err = raw("four", "25000").parse().unwrap_err();
    assert!(matches!(err, BrandrecError::InvalidNumericInput { field: "stars", .. }));
}

#[test]
fn non_finite_stars_rejected() {
    for bad in ["NaN", "inf", "-inf"] {
        let err = raw(bad, "25000").parse().unwrap_err();
        assert!(matches!(err, BrandrecError::InvalidNumericInput { field: "stars", .. }), "{bad}");
    }
}

#[test]
fn fractional_price_rejected() {
    let err = raw("4", "24999.5").parse().unwrap_err();
    assert!(matches!(err, BrandrecError::InvalidNumericInput { field: "price", .. }));
}

#[test]
fn empty_price_rejected() {
    assert!(raw("4", "").parse().unwrap_err().is_input_error());
}

#[test]
fn raw_request_accepts_form_field_names() {
    let json = r#"{
        "stars": "4",
        "MRP": "25000",
        "Operating_system1": "WebOS",
        "Speaker1": "40 W Speaker Output",
        "Frequency1": "120 Hz Refresh Rate",
        "Picture_qualtiy1": "Ultra HD"
    }"#;
    let raw: RawRecommendationRequest = serde_json::from_str(json).unwrap();
    assert_eq!(raw.price, "25000");
    assert_eq!(raw.operating_system, "WebOS");
    assert_eq!(raw.refresh_rate, "120 Hz Refresh Rate");
    assert_eq!(raw.picture_quality, "Ultra HD");
}

#[test]
fn feature_vector_from_slice_rejects_wrong_length() {
    let err = FeatureVector::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(
        err,
        InferenceError::FeatureCountMismatch {
            expected: 6,
            actual: 3
        }
    ));
}

#[test]
fn feature_vector_named_slots_follow_order() {
    let fv = FeatureVector::new([4.0, 25000.0, 0.0, 0.0, 0.0, 2.0]);
    let names: Vec<&str> = fv.named().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        ["stars", "price", "operating_system", "speaker", "refresh_rate", "picture_quality"]
    );
    assert!(fv.is_finite());
}

#[test]
fn recommendation_accessors() {
    let rec = Recommendation::new(vec![
        BrandScore {
            label: "LG".into(),
            probability: 0.6,
        },
        BrandScore {
            label: "SONY".into(),
            probability: 0.3,
        },
    ]);
    assert_eq!(rec.len(), 2);
    assert_eq!(rec.top().unwrap().label, "LG");
    assert_eq!(rec.labels(), vec!["LG", "SONY"]);
    assert!(Recommendation::default().is_empty());
}
