use serde::{Deserialize, Serialize};

/// One brand and the probability the classifier assigned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandScore {
    pub label: String,
    pub probability: f64,
}

/// Ranked brands, probability descending.
///
/// Ties keep brand-label order. Never longer than the configured top-k.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub brands: Vec<BrandScore>,
}

impl Recommendation {
    pub fn new(brands: Vec<BrandScore>) -> Self {
        Self { brands }
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BrandScore> {
        self.brands.iter()
    }

    /// The highest-ranked brand, if any.
    pub fn top(&self) -> Option<&BrandScore> {
        self.brands.first()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.brands.iter().map(|b| b.label.as_str()).collect()
    }
}
